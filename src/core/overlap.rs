// Compositing-based overlap detection.
//
// Instead of intersecting the transcendental pickup curve with rotated cone
// sectors analytically, both are rasterized into an off-screen pixmap and a
// `SourceIn` composite leaves alpha only where a speaker cone and the mic
// pattern cover the same pixel. The scratch pixmaps are allocated per call
// and dropped immediately.

use tiny_skia::{BlendMode, FillRule, Paint, Pixmap, PixmapPaint, Transform};

use super::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, MASK_CONE_RGBA, MASK_PICKUP_RGBA, OVERLAP_RGBA};
use super::geometry;
use super::scene::Scene;

/// Translate-then-rotate placement, matching how entities carry their
/// orientation: local +x is the forward axis.
pub(crate) fn place(x: f32, y: f32, deg: f32) -> Transform {
    Transform::from_translate(x, y).pre_concat(Transform::from_rotate(deg))
}

fn marker_paint(rgba: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
    // Aliased edges keep coverage binary: a pixel is either in a shape or
    // not, so the boolean test cannot depend on blending fringes.
    paint.anti_alias = false;
    paint
}

/// Rasterize the joint coverage: opaque pixels are covered by at least one
/// speaker cone AND the mic pickup pattern; everything else is transparent.
/// Only the alpha channel carries meaning, so the marker colors are
/// interchangeable.
pub(crate) fn coverage_with_markers(
    scene: &Scene,
    cone_rgba: [u8; 4],
    pickup_rgba: [u8; 4],
) -> Option<Pixmap> {
    let mut cones = Pixmap::new(CANVAS_WIDTH, CANVAS_HEIGHT)?;
    let cone_path = geometry::polygon_path(&geometry::cone_points(scene.cone_radius()))?;
    let cone_paint = marker_paint(cone_rgba);
    for s in scene.speakers() {
        cones.fill_path(
            &cone_path,
            &cone_paint,
            FillRule::Winding,
            place(s.position.x, s.position.y, s.orientation_deg),
            None,
        );
    }

    let mic = scene.mic();
    let mut pickup = Pixmap::new(CANVAS_WIDTH, CANVAS_HEIGHT)?;
    let pickup_path =
        geometry::polygon_path(&geometry::pattern_points(mic.pattern, scene.pickup_scale()))?;
    pickup.fill_path(
        &pickup_path,
        &marker_paint(pickup_rgba),
        FillRule::Winding,
        place(mic.position.x, mic.position.y, mic.orientation_deg),
        None,
    );

    // Full-buffer SourceIn: the pickup layer survives only where the cone
    // layer is already opaque. Applying the rule as a whole-layer composite
    // keeps it scoped to this one draw.
    let intersect = PixmapPaint {
        blend_mode: BlendMode::SourceIn,
        ..PixmapPaint::default()
    };
    cones.draw_pixmap(0, 0, pickup.as_ref(), &intersect, Transform::identity(), None);
    Some(cones)
}

fn coverage(scene: &Scene) -> Option<Pixmap> {
    coverage_with_markers(scene, MASK_CONE_RGBA, MASK_PICKUP_RGBA)
}

/// True if any speaker cone and the mic pattern share at least one pixel.
pub fn has_overlap(scene: &Scene) -> bool {
    match coverage(scene) {
        Some(pm) => pm.pixels().iter().any(|p| p.alpha() > 0),
        None => false,
    }
}

/// The coverage raster recolored to opaque red, ready to composite under
/// the translucent pattern layers.
pub fn overlap_mask(scene: &Scene) -> Option<Pixmap> {
    let mut pm = coverage(scene)?;
    for px in pm.data_mut().chunks_exact_mut(4) {
        if px[3] > 0 {
            px.copy_from_slice(&OVERLAP_RGBA);
        }
    }
    Some(pm)
}
