// Polar pickup-pattern curves and the speaker emission cone.
//
// Everything here is pure: the same inputs always sample the same boundary
// points, so renders of an unchanged scene are pixel-identical.

use glam::Vec2;
use tiny_skia::{Path, PathBuilder};

use super::constants::{BASE_RADIUS, CONE_HALF_ANGLE_DEG};

/// Directional pickup pattern of the microphone.
///
/// Angle 0 points along the pattern's local forward axis (+x before the
/// entity's rotation is applied).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    Omnidirectional,
    Cardioid,
    Supercardioid,
    Hypercardioid,
}

impl PatternKind {
    pub const ALL: [PatternKind; 4] = [
        PatternKind::Omnidirectional,
        PatternKind::Cardioid,
        PatternKind::Supercardioid,
        PatternKind::Hypercardioid,
    ];

    /// Normalized polar radius in [0, 1] at `theta` radians off-axis.
    ///
    /// The hypercardioid polynomial goes negative past its null; radius is
    /// clamped to zero rather than mirroring through the origin.
    pub fn polar_radius(self, theta: f32) -> f32 {
        match self {
            PatternKind::Omnidirectional => 1.0,
            PatternKind::Cardioid => (1.0 + theta.cos()) / 2.0,
            PatternKind::Supercardioid => 0.59 + 0.41 * theta.cos(),
            PatternKind::Hypercardioid => (0.25 + 0.75 * theta.cos()).max(0.0),
        }
    }

    /// Parse the `<select>` option values used by the frontend.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "omnidirectional" => Some(PatternKind::Omnidirectional),
            "cardioid" => Some(PatternKind::Cardioid),
            "supercardioid" => Some(PatternKind::Supercardioid),
            "hypercardioid" => Some(PatternKind::Hypercardioid),
            _ => None,
        }
    }
}

/// Sample the closed pickup boundary at 1 degree resolution.
///
/// 361 points inclusive of both endpoints, so the first point equals the
/// last and the polygon closes exactly.
pub fn pattern_points(kind: PatternKind, scale: f32) -> Vec<Vec2> {
    (0..=360)
        .map(|deg| {
            // The 360 degree sample reuses 0 so the ring closes bit-exactly.
            let rad = ((deg % 360) as f32).to_radians();
            let r = BASE_RADIUS * kind.polar_radius(rad) * scale;
            Vec2::new(r * rad.cos(), r * rad.sin())
        })
        .collect()
}

/// Circular sector for a speaker's emission cone: apex at the origin,
/// half-angle 45 degrees around the local +x axis, arc sampled at 1 degree.
pub fn cone_points(radius: f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(2 * CONE_HALF_ANGLE_DEG as usize + 2);
    points.push(Vec2::ZERO);
    for deg in -CONE_HALF_ANGLE_DEG..=CONE_HALF_ANGLE_DEG {
        let rad = (deg as f32).to_radians();
        points.push(Vec2::new(radius * rad.cos(), radius * rad.sin()));
    }
    points
}

/// Build a closed fill path from boundary points in local space.
///
/// Returns `None` for degenerate input (fewer than three points), which
/// callers treat as nothing to draw.
pub fn polygon_path(points: &[Vec2]) -> Option<Path> {
    if points.len() < 3 {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(points[0].x, points[0].y);
    for p in &points[1..] {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}
