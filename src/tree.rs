use crate::branch::Branch;
use crate::config::GrowthMode;
use crate::types::{NodeId, ROOT};

#[derive(Debug)]
pub struct BranchNode {
    pub branch: Branch,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

#[derive(Debug)]
pub struct FractalTree {
    pub nodes: Vec<BranchNode>,
    next_id: usize,
    mode: GrowthMode,
}

impl BranchNode {
    pub fn new_root(branch: Branch) -> Self {
        Self {
            branch,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn new_child(branch: Branch, parent: NodeId) -> Self {
        Self {
            branch,
            parent: Some(parent),
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl FractalTree {
    pub fn new(
        upper_width: f32,
        bottom_width: f32,
        height: f32,
        angle_deg: f32,
        mode: GrowthMode,
    ) -> Self {
        let root = Branch::new(0, upper_width, bottom_width, height, angle_deg);
        Self {
            nodes: vec![BranchNode::new_root(root)],
            next_id: 1,
            mode,
        }
    }

    pub fn mode(&self) -> GrowthMode {
        self.mode
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Attaches a left and a right child to `parent` in one step, so a
    /// node can never end up with only one child. Ids come from the
    /// tree-local counter and are strictly increasing, left before right.
    pub fn add_children(
        &mut self,
        parent: NodeId,
        upper_width: f32,
        bottom_width: f32,
        height: f32,
        left_angle: f32,
        right_angle: f32,
    ) -> (NodeId, NodeId) {
        debug_assert!(self.nodes[parent].is_leaf(), "parent already has children");

        let left = self.push_child(parent, upper_width, bottom_width, height, left_angle);
        let right = self.push_child(parent, upper_width, bottom_width, height, right_angle);
        self.nodes[parent].left = Some(left);
        self.nodes[parent].right = Some(right);
        (left, right)
    }

    fn push_child(
        &mut self,
        parent: NodeId,
        upper_width: f32,
        bottom_width: f32,
        height: f32,
        angle_deg: f32,
    ) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        // Branch ids and arena indices stay in lockstep because nodes are
        // only ever appended.
        debug_assert_eq!(id, self.nodes.len());
        let branch = Branch::new(id, upper_width, bottom_width, height, angle_deg);
        self.nodes.push(BranchNode::new_child(branch, parent));
        id
    }

    /// Pre-order flattening of every branch: root, then the left subtree,
    /// then the right subtree.
    pub fn branches(&self) -> Vec<&Branch> {
        let mut out = Vec::with_capacity(self.nodes.len());
        if self.nodes.is_empty() {
            return out;
        }

        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            out.push(&node.branch);
            if let Some(right) = node.right {
                stack.push(right);
            }
            if let Some(left) = node.left {
                stack.push(left);
            }
        }
        out
    }

    /// Depth-first search for the current leaves, left-to-right.
    pub fn leaf_ids(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.nodes.is_empty() {
            return out;
        }

        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_leaf() {
                out.push(id);
                continue;
            }
            if let Some(right) = node.right {
                stack.push(right);
            }
            if let Some(left) = node.left {
                stack.push(left);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> FractalTree {
        FractalTree::new(3.0, 5.0, 10.0, 0.0, GrowthMode::Regular)
    }

    #[test]
    fn new_tree_has_a_single_root_leaf() {
        let tree = small_tree();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.nodes[ROOT].branch.id(), 0);
        assert_eq!(tree.nodes[ROOT].parent, None);
        assert!(tree.nodes[ROOT].is_leaf());
        assert_eq!(tree.leaf_ids(), vec![ROOT]);
    }

    #[test]
    fn add_children_wires_both_links() {
        let mut tree = small_tree();
        let (left, right) = tree.add_children(ROOT, 1.0, 2.0, 3.0, 10.0, -10.0);

        assert_eq!((left, right), (1, 2));
        assert_eq!(tree.nodes[ROOT].left, Some(left));
        assert_eq!(tree.nodes[ROOT].right, Some(right));
        assert_eq!(tree.nodes[left].parent, Some(ROOT));
        assert_eq!(tree.nodes[right].parent, Some(ROOT));
        assert!(!tree.nodes[ROOT].is_leaf());

        // Ids match arena indices and the left child gets the smaller one.
        assert_eq!(tree.nodes[left].branch.id(), 1);
        assert_eq!(tree.nodes[right].branch.id(), 2);
        assert_eq!(tree.nodes[left].branch.angle(), 10.0);
        assert_eq!(tree.nodes[right].branch.angle(), -10.0);
    }

    #[test]
    fn branches_flatten_in_pre_order() {
        let mut tree = small_tree();
        let (l, r) = tree.add_children(ROOT, 1.0, 2.0, 3.0, 0.0, 0.0);
        tree.add_children(l, 1.0, 2.0, 3.0, 0.0, 0.0);
        tree.add_children(r, 1.0, 2.0, 3.0, 0.0, 0.0);

        let ids: Vec<usize> = tree.branches().iter().map(|b| b.id()).collect();
        // Root first, then the whole left subtree, then the right subtree.
        assert_eq!(ids, vec![0, 1, 3, 4, 2, 5, 6]);
    }

    #[test]
    fn leaf_ids_are_left_to_right() {
        let mut tree = small_tree();
        let (l, r) = tree.add_children(ROOT, 1.0, 2.0, 3.0, 0.0, 0.0);
        tree.add_children(l, 1.0, 2.0, 3.0, 0.0, 0.0);

        // Left subtree grew one level deeper; the right child is still a leaf.
        assert_eq!(tree.leaf_ids(), vec![3, 4, r]);
    }
}
