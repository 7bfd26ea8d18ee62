//! Breadth-first world-space layout of a [`FractalTree`].
//!
//! Every branch describes itself in a local frame whose base sits at the
//! origin. Because each branch starts exactly where its parent ends, the
//! world position of a branch's base is its parent's world-space tip. The
//! layout pass walks the tree breadth-first and resolves those positions
//! in a single O(n) sweep.

use std::collections::VecDeque;

use glam::Vec2;

use crate::tree::FractalTree;
use crate::types::{NodeId, ROOT};

/// A branch's node id paired with the world-space position of its base.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEntry {
    pub node: NodeId,
    pub anchor: Vec2,
}

/// Computes the anchor of every branch in breadth-first discovery order.
///
/// The traversal keeps a FIFO queue seeded with the root and a per-node
/// table of world-space tips, filled as nodes are dequeued:
///
/// 1. Dequeue a node. The root anchors at `(0, 0)`; any other node
///    anchors at its parent's recorded tip — the exact stored value, not
///    a recomputation.
/// 2. Record the node's own tip as `anchor + frame.top` for its children
///    to consume later.
/// 3. Enqueue the children, left before right.
///
/// A parent is always dequeued (and its tip recorded) before either of
/// its children, so the table lookup in step 1 can never miss.
///
/// ### Parameters
/// - `tree` - The tree to lay out; only read access is required.
///
/// ### Returns
/// One [`LayoutEntry`] per node, root first. The result is not cached:
/// call again after every growth step.
pub fn compute_layout(tree: &FractalTree) -> Vec<LayoutEntry> {
    let mut entries = Vec::with_capacity(tree.node_count());
    if tree.nodes.is_empty() {
        return entries;
    }

    // World-space tip per node, indexed by arena id.
    let mut tops = vec![Vec2::ZERO; tree.node_count()];
    let mut queue = VecDeque::with_capacity(tree.node_count());
    queue.push_back(ROOT);

    while let Some(id) = queue.pop_front() {
        let node = &tree.nodes[id];
        let anchor = match node.parent {
            None => Vec2::ZERO,
            Some(parent) => tops[parent],
        };

        entries.push(LayoutEntry { node: id, anchor });
        tops[id] = anchor + node.branch.frame().top;

        if let Some(left) = node.left {
            queue.push_back(left);
        }
        if let Some(right) = node.right {
            queue.push_back(right);
        }
    }

    entries
}
