use glam::Vec2;

/// The six points describing one branch in its own local frame.
///
/// A frame stores the four corners of the (possibly rotated) segment plus
/// two derived midpoints:
///
/// - `top` — midpoint of `up_left` and `up_right`.
/// - `bottom` — midpoint of `down_left` and `down_right`.
///
/// On construction the whole point set is translated so that `bottom`
/// lands exactly on the origin. Every branch therefore describes itself
/// relative to its own base, and positioning a branch in the world is a
/// single translation of this frame (see [`crate::layout`]).
///
/// The y axis grows downward, so the `top` of an upright branch has a
/// negative y component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchFrame {
    pub up_left: Vec2,
    pub up_right: Vec2,
    pub down_left: Vec2,
    pub down_right: Vec2,
    pub top: Vec2,
    pub bottom: Vec2,
}

impl BranchFrame {
    /// Builds a frame from the four corner points of a segment.
    ///
    /// The `top` and `bottom` midpoints are derived from the corners as
    /// given (after any rotation the caller has already applied), and all
    /// six points are then shifted by `-bottom` so that the base midpoint
    /// sits at `Vec2::ZERO`.
    ///
    /// ### Parameters
    /// - `up_left`, `up_right` - The two corners of the narrow/top edge.
    /// - `down_left`, `down_right` - The two corners of the base edge.
    ///
    /// ### Returns
    /// A new [`BranchFrame`] whose `bottom` is exactly `Vec2::ZERO`.
    pub fn from_corners(up_left: Vec2, up_right: Vec2, down_left: Vec2, down_right: Vec2) -> Self {
        let top = (up_left + up_right) / 2.0;
        let bottom = (down_left + down_right) / 2.0;

        Self {
            up_left: up_left - bottom,
            up_right: up_right - bottom,
            down_left: down_left - bottom,
            down_right: down_right - bottom,
            top: top - bottom,
            bottom: Vec2::ZERO,
        }
    }

    /// Translates all six points by `delta`.
    ///
    /// This relocates an already-derived frame; it never re-derives the
    /// midpoints. After a non-zero offset the frame's `bottom` no longer
    /// sits at the origin.
    ///
    /// ### Parameters
    /// - `delta` - Translation applied to every point of the frame.
    pub fn offset(&mut self, delta: Vec2) {
        self.up_left += delta;
        self.up_right += delta;
        self.down_left += delta;
        self.down_right += delta;
        self.top += delta;
        self.bottom += delta;
    }
}
