pub mod animation;
pub mod controller;
pub mod geometry;
pub mod model;
pub mod selection;
pub mod view;

pub use animation::{AnimationParams, SegmentAnimation, Spring, SpringParams, Tween};
pub use controller::{Chart, ChartGeometry, ChartOptions};
pub use geometry::{Point, WedgePath, angle_around, hit_path, polar, wedge_path};
pub use model::{
    ChartLayout, IconKey, LabelAnchor, LayoutMode, RenderSnapshot, Segment, SegmentFrame,
    SegmentId, SegmentName, SegmentSpan, Spoke, ValueEditor,
};
pub use selection::{SelectionChange, SelectionState};
pub use view::render_svg;

pub const WHEEL_RADIUS: f64 = 100.0;
pub const EXTRA_PADDING: f64 = 30.0; // spoke overhang past the rim
pub const ICON_SIZE: f64 = 24.0;
pub const LIFT_OFFSET: f64 = 20.0; // radial displacement of the selected wedge
pub const SCALE_MAX: f64 = 10.0; // value that fills the full radius
pub const SLIDER_MIN: f64 = 1.0;
pub const SLIDER_MAX: f64 = 10.0;
pub const SLIDER_STEP: f64 = 0.1;
pub const MAGNITUDE_DURATION_MS: u64 = 250;
pub const SECTOR_REVEAL_MS: u64 = 2000;
pub const SPRING_STIFFNESS: f64 = 100.0;
pub const SPRING_DAMPING: f64 = 50.0;
pub const SPRING_MASS: f64 = 1.0;
