use log::{debug, error, info, trace};
use rustc_hash::FxHashMap;

use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;
use crate::error::{wire_len, LzhError, Result};
use crate::tools::freq_count::{count_frequency, FreqTable};
use crate::tools::int_codec::{push_i32, read_i32};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One step on the way from the root to a leaf. Left is written as 0, Right as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jump {
    Left,
    Right,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    /// Queue insertion sequence number, the tie-break between equal weights.
    pub seq: usize,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, seq: usize, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }

    /// Number of (leaf, internal) nodes in this subtree.
    #[cfg(test)]
    fn node_counts(&self) -> (usize, usize) {
        let mut leaves = 0;
        let mut internals = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match &node.node_data {
                NodeData::Leaf(_) => leaves += 1,
                NodeData::Kids(left, right) => {
                    internals += 1;
                    stack.push(left.as_ref());
                    stack.push(right.as_ref());
                }
            }
        }
        (leaves, internals)
    }
}

impl Ord for Node {
    /// Order Nodes by decreasing weight, then decreasing sequence number, so the std max-heap
    /// pops the lightest, oldest node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the huffman tree for a frequency table. Leaves enter the queue in table order and each
/// merged node takes the next sequence number, so the same table always gives the same tree.
pub fn build_tree(table: &FreqTable) -> Result<Node> {
    if table.is_empty() {
        return Err(LzhError::TreeConstruction("frequency table is empty"));
    }

    let mut queue: BinaryHeap<Node> = table
        .entries()
        .iter()
        .enumerate()
        .map(|(seq, e)| Node::new(e.count as u64, seq, NodeData::Leaf(e.symbol)))
        .collect();
    let mut next_seq = table.len();

    while queue.len() > 1 {
        let first = queue
            .pop()
            .ok_or(LzhError::TreeConstruction("queue emptied while merging"))?;
        let second = queue
            .pop()
            .ok_or(LzhError::TreeConstruction("queue emptied while merging"))?;
        queue.push(Node::new(
            first.weight + second.weight,
            next_seq,
            NodeData::Kids(Box::new(first), Box::new(second)),
        ));
        next_seq += 1;
    }

    queue
        .pop()
        .ok_or(LzhError::TreeConstruction("no root left in the queue"))
}

/// Symbol to path lookup, computed with one walk of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: FxHashMap<u8, Vec<Jump>>,
}

impl CodeTable {
    pub fn new(root: &Node) -> Self {
        let mut codes = FxHashMap::default();
        let mut stack: Vec<(&Node, Vec<Jump>)> = vec![(root, Vec::new())];
        while let Some((node, path)) = stack.pop() {
            match &node.node_data {
                NodeData::Leaf(symbol) => {
                    codes.insert(*symbol, path);
                }
                NodeData::Kids(left, right) => {
                    let mut left_path = path.clone();
                    left_path.push(Jump::Left);
                    let mut right_path = path;
                    right_path.push(Jump::Right);
                    stack.push((right.as_ref(), right_path));
                    stack.push((left.as_ref(), left_path));
                }
            }
        }
        Self { codes }
    }

    /// The path to `symbol`. A lone-leaf tree gives the empty path.
    pub fn path_to(&self, symbol: u8) -> Result<&[Jump]> {
        self.codes
            .get(&symbol)
            .map(|p| p.as_slice())
            .ok_or(LzhError::SymbolNotInTree(symbol))
    }
}

/// Root to leaf path for a single symbol. Prefer CodeTable when encoding many symbols.
pub fn path_to(root: &Node, symbol: u8) -> Result<Vec<Jump>> {
    CodeTable::new(root).path_to(symbol).map(|p| p.to_vec())
}

/// Huffman encode a buffer: frequency table header, bit count, then the packed codes.
pub fn huf_encode(data: &[u8]) -> Result<Vec<u8>> {
    let table = count_frequency(data)?;
    let mut out = Vec::with_capacity(4 + table.len() * 5 + 4 + data.len());
    table.write(&mut out);

    // Nothing to encode. Write a zero bit count so the header is complete.
    if table.is_empty() {
        push_i32(&mut out, 0);
        return Ok(out);
    }

    let tree = build_tree(&table)?;
    let codes = CodeTable::new(&tree);
    debug!("Huffman tree has {} symbols", table.len());

    let mut bp = BitPacker::new(data.len());
    for &symbol in data {
        for &jump in codes.path_to(symbol)? {
            bp.out_bit(jump == Jump::Right);
        }
    }
    let bit_count = bp.bit_count();
    bp.flush();
    trace!("Huffman payload ends at {}", bp.loc());

    push_i32(&mut out, wire_len("encoded bit count", bit_count)?);
    out.extend_from_slice(&bp.output);
    info!(
        "Huffman encoded {} bytes with {} symbols into {} bits ({} bytes total)",
        data.len(),
        table.len(),
        bit_count,
        out.len()
    );
    Ok(out)
}

/// Huffman decode a buffer written by huf_encode.
pub fn huf_decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut pos = 0;
    let table = FreqTable::read(data, &mut pos)?;
    let bit_count = read_i32(data, &mut pos, "encoded bit count")?;
    if bit_count < 0 {
        error!("Negative bit count {}", bit_count);
        return Err(LzhError::malformed("encoded bit count", pos - 4));
    }
    let bit_count = bit_count as usize;

    let payload = &data[pos..];
    let mut br = BitReader::new(payload);
    if bit_count > br.bits_left() {
        error!(
            "Stream claims {} bits but only {} are present",
            bit_count,
            br.bits_left()
        );
        return Err(LzhError::malformed("encoded bit payload", data.len()));
    }

    if table.is_empty() {
        if bit_count != 0 {
            return Err(LzhError::malformed("bits without a frequency table", pos));
        }
        return Ok(Vec::new());
    }

    let root = build_tree(&table)?;

    // A single symbol has a zero length code. Its count is the whole story.
    if let NodeData::Leaf(symbol) = root.node_data {
        if bit_count != 0 {
            return Err(LzhError::malformed("bits for a single symbol alphabet", pos));
        }
        let out = vec![symbol; table.total()];
        debug!("Single symbol alphabet, {} copies of {:#04x}", out.len(), symbol);
        return Ok(out);
    }

    // Every code in a tree of two or more leaves is at least one bit long.
    if table.total() > bit_count {
        error!(
            "Table claims {} symbols but only {} bits are present",
            table.total(),
            bit_count
        );
        return Err(LzhError::malformed("symbol counts exceed payload", pos));
    }
    let mut out = Vec::with_capacity(table.total());
    let mut emitted = [0_usize; 256];

    let mut node = &root;
    for _ in 0..bit_count {
        let right = br
            .bool_bit()
            .ok_or_else(|| LzhError::malformed("encoded bit payload", data.len()))?;
        if let NodeData::Kids(left_child, right_child) = &node.node_data {
            node = if right { right_child.as_ref() } else { left_child.as_ref() };
        }
        if let NodeData::Leaf(symbol) = node.node_data {
            out.push(symbol);
            emitted[symbol as usize] += 1;
            node = &root;
        }
    }
    if !std::ptr::eq(node, &root) {
        error!("Bit stream ends inside a code at {}", br.loc());
        return Err(LzhError::malformed("bit stream ends inside a code", data.len()));
    }
    if let Some(entry) = table
        .entries()
        .iter()
        .find(|e| emitted[e.symbol as usize] != e.count as usize)
    {
        error!(
            "Symbol {:#04x} decoded {} times, table says {}",
            entry.symbol, emitted[entry.symbol as usize], entry.count
        );
        return Err(LzhError::malformed("symbol counts disagree with payload", pos));
    }

    info!("Huffman decoded {} bits into {} bytes", bit_count, out.len());
    Ok(out)
}
