use crate::frame::BranchFrame;
use crate::geom;
use glam::Vec2;

/// Classification of one branch segment, derived from its clamped
/// dimensions at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchShape {
    /// Degenerate: no vertical extent or no base edge.
    Error,
    Rectangle,
    Triangle,
    Trapezoid,
}

/// One tapered segment of a fractal tree.
///
/// Dimensions are clamped to zero at construction (never rejected); a
/// degenerate result is reported through [`BranchShape::Error`] instead of
/// a failure. Geometry is fixed once built — only the display `name` can
/// be assigned afterwards. Identity, equality and hashing are by `id`
/// alone: two branches with the same measurements are still distinct.
#[derive(Clone, Debug)]
pub struct Branch {
    id: usize,
    pub name: Option<String>,
    upper_width: f32,
    bottom_width: f32,
    height: f32,
    angle: f32,
    shape: BranchShape,
    frame: BranchFrame,
}

impl Branch {
    /// Builds a branch from raw dimensions and a tilt in degrees.
    ///
    /// Negative widths and heights are floored to zero; `angle_deg` is
    /// taken as-is and may be zero or negative.
    pub fn new(id: usize, upper_width: f32, bottom_width: f32, height: f32, angle_deg: f32) -> Self {
        let upper_width = upper_width.max(0.0);
        let bottom_width = bottom_width.max(0.0);
        let height = height.max(0.0);

        Self {
            id,
            name: None,
            upper_width,
            bottom_width,
            height,
            angle: angle_deg,
            shape: classify(height, bottom_width, upper_width),
            frame: build_frame(upper_width, bottom_width, height, angle_deg),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn upper_width(&self) -> f32 {
        self.upper_width
    }

    pub fn bottom_width(&self) -> f32 {
        self.bottom_width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Tilt in degrees, counter-clockwise positive.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn shape(&self) -> BranchShape {
        self.shape
    }

    pub fn frame(&self) -> &BranchFrame {
        &self.frame
    }

    /// Closed outline polygon for rendering, rebuilt from the stored frame
    /// on every call: `up_left → up_right → down_right → down_left` and
    /// back to the start.
    pub fn outline(&self) -> [Vec2; 5] {
        let f = &self.frame;
        [f.up_left, f.up_right, f.down_right, f.down_left, f.up_left]
    }
}

impl PartialEq for Branch {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Branch {}

impl std::hash::Hash for Branch {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn classify(height: f32, bottom_width: f32, upper_width: f32) -> BranchShape {
    if height == 0.0 || bottom_width == 0.0 {
        BranchShape::Error
    } else if upper_width == 0.0 {
        BranchShape::Triangle
    } else if upper_width == bottom_width {
        BranchShape::Rectangle
    } else {
        BranchShape::Trapezoid
    }
}

/// Lays out the four corners with the wider edge spanning its full width
/// and the narrower edge centered above or below it, rotates them about
/// the base midpoint when tilted, and normalizes the result.
fn build_frame(upper_width: f32, bottom_width: f32, height: f32, angle_deg: f32) -> BranchFrame {
    let diff = (upper_width - bottom_width).abs();

    let (mut up_left, mut up_right, mut down_left, mut down_right) = if upper_width > bottom_width {
        (
            Vec2::new(0.0, 0.0),
            Vec2::new(upper_width, 0.0),
            Vec2::new(diff / 2.0, height),
            Vec2::new(diff / 2.0 + bottom_width, height),
        )
    } else {
        (
            Vec2::new(diff / 2.0, 0.0),
            Vec2::new(diff / 2.0 + upper_width, 0.0),
            Vec2::new(0.0, height),
            Vec2::new(bottom_width, height),
        )
    };

    if angle_deg != 0.0 {
        // The base midpoint is the rotation pivot, so it stays put.
        let bottom = (down_left + down_right) / 2.0;
        up_left = geom::rotated(up_left, bottom, angle_deg);
        up_right = geom::rotated(up_right, bottom, angle_deg);
        down_left = geom::rotated(down_left, bottom, angle_deg);
        down_right = geom::rotated(down_right, bottom, angle_deg);
    }

    BranchFrame::from_corners(up_left, up_right, down_left, down_right)
}
