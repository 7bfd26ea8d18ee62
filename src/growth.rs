//! Generation growth for a [`FractalTree`].
//!
//! One growth step visits every current leaf and attaches two scaled
//! children to it:
//! 1. Collect the leaves with [`FractalTree::leaf_ids`] (depth-first).
//! 2. Scale the leaf's dimensions by the active mode's ratio.
//! 3. Pick the child tilts from the leaf's position in the tree: the
//!    root's children stay straight, its grandchildren fan out by
//!    [`ROOT_FAN_ANGLE`], and deeper children take their grandparent's
//!    tilt damped by the ratio.
//! 4. Attach both children via [`FractalTree::add_children`].
//!
//! Growth is irreversible: a leaf that has grown becomes internal and
//! never receives further children of its own — only its children are
//! eligible in the next generation.

use crate::config::{GrowthMode, ROOT_FAN_ANGLE};
use crate::tree::FractalTree;
use crate::types::NodeId;

/// Advances every current leaf of the tree by one generation.
///
/// In [`GrowthMode::Regular`] and [`GrowthMode::Complementary`] each leaf
/// gains a left and a right child whose dimensions are the leaf's scaled
/// by the mode ratio (0.618 / 0.382). In [`GrowthMode::RandomMix`] the
/// tree is left untouched; the variant is reserved for randomized angle
/// selection.
///
/// ### Parameters
/// - `tree` - The tree to be mutated; new nodes will be appended.
///
/// ### Returns
/// The ids of all newly created nodes in creation order, empty for
/// [`GrowthMode::RandomMix`].
pub fn grow_one_generation(tree: &mut FractalTree) -> Vec<NodeId> {
    let Some(ratio) = tree.mode().ratio() else {
        // Reserved mode with no behavior yet: leave the tree untouched.
        debug_assert_eq!(tree.mode(), GrowthMode::RandomMix);
        return Vec::new();
    };

    let leaves = tree.leaf_ids();
    let mut new_ids = Vec::with_capacity(leaves.len() * 2);

    for leaf in leaves {
        let branch = &tree.nodes[leaf].branch;
        let upper_width = branch.upper_width() * ratio;
        let bottom_width = branch.bottom_width() * ratio;
        let height = branch.height() * ratio;

        let (left_angle, right_angle) = child_angles(tree, leaf, ratio);

        let (left, right) =
            tree.add_children(leaf, upper_width, bottom_width, height, left_angle, right_angle);
        new_ids.push(left);
        new_ids.push(right);
    }

    new_ids
}

/// Tilts, in degrees, for the two children a leaf is about to grow.
///
/// - The root's own children stay straight (tilt 0).
/// - Children whose grandparent is the root fan out by the fixed
///   [`ROOT_FAN_ANGLE`] seed, left positive, right negative.
/// - Deeper children both take the leaf's **parent's** tilt damped by the
///   active ratio. The damping reads the parent's angle, not the leaf's
///   own, and assigns the same signed value to both sides.
fn child_angles(tree: &FractalTree, leaf: NodeId, ratio: f32) -> (f32, f32) {
    match tree.nodes[leaf].parent {
        None => (0.0, 0.0),
        Some(parent) if tree.nodes[parent].parent.is_none() => (ROOT_FAN_ANGLE, -ROOT_FAN_ANGLE),
        Some(parent) => {
            let damped = tree.nodes[parent].branch.angle() * ratio;
            (damped, damped)
        }
    }
}
