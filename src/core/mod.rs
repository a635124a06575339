pub mod constants;
pub mod geometry;
pub mod judge;
pub mod overlap;
pub mod render;
pub mod scene;

pub use geometry::PatternKind;
pub use judge::{Severity, Verdict};
pub use render::Assets;
pub use scene::{Scene, Target};
