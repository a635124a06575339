// Full-scene repaint: overlap highlight underneath, translucent pattern
// shapes on top, entity icons last. No incremental diffing; every call
// redraws the whole venue into a fresh pixmap.

use glam::Vec2;
use tiny_skia::{FillRule, FilterQuality, Paint, Pixmap, PixmapPaint, Transform};

use super::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, FILL_CONE_RGBA, FILL_PICKUP_RGBA, ICON_SIZE,
    MIC_ICON_ROTATION_OFFSET_DEG, SPEAKER_ICON_ROTATION_OFFSET_DEG,
};
use super::geometry;
use super::overlap;
use super::scene::Scene;

/// Decoded icon artwork. Either icon may be missing (failed fetch or decode);
/// rendering then simply skips that draw.
#[derive(Default)]
pub struct Assets {
    pub speaker_icon: Option<Pixmap>,
    pub mic_icon: Option<Pixmap>,
}

fn fill_paint(rgba: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
    paint.anti_alias = true;
    paint
}

/// Draw an icon scaled to `ICON_SIZE`, centered on `center`, rotated so its
/// artwork "up" axis follows the entity's forward direction.
fn draw_icon(pm: &mut Pixmap, icon: Option<&Pixmap>, center: Vec2, angle_deg: f32) {
    let Some(icon) = icon else { return };
    let (w, h) = (icon.width() as f32, icon.height() as f32);
    if w == 0.0 || h == 0.0 {
        return;
    }
    let t = Transform::from_translate(center.x, center.y)
        .pre_concat(Transform::from_rotate(angle_deg))
        .pre_concat(Transform::from_scale(ICON_SIZE / w, ICON_SIZE / h))
        .pre_concat(Transform::from_translate(-w / 2.0, -h / 2.0));
    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    pm.draw_pixmap(0, 0, icon.as_ref(), &paint, t, None);
}

/// Repaint the venue. Deterministic: an unchanged scene renders
/// pixel-identically.
pub fn render(scene: &Scene, assets: &Assets) -> Option<Pixmap> {
    let mut pm = Pixmap::new(CANVAS_WIDTH, CANVAS_HEIGHT)?;

    if let Some(mask) = overlap::overlap_mask(scene) {
        pm.draw_pixmap(
            0,
            0,
            mask.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    let cone_path = geometry::polygon_path(&geometry::cone_points(scene.cone_radius()))?;
    let cone_paint = fill_paint(FILL_CONE_RGBA);
    for s in scene.speakers() {
        pm.fill_path(
            &cone_path,
            &cone_paint,
            FillRule::Winding,
            overlap::place(s.position.x, s.position.y, s.orientation_deg),
            None,
        );
    }

    let mic = scene.mic();
    let pickup_path =
        geometry::polygon_path(&geometry::pattern_points(mic.pattern, scene.pickup_scale()))?;
    pm.fill_path(
        &pickup_path,
        &fill_paint(FILL_PICKUP_RGBA),
        FillRule::Winding,
        overlap::place(mic.position.x, mic.position.y, mic.orientation_deg),
        None,
    );

    for s in scene.speakers() {
        draw_icon(
            &mut pm,
            assets.speaker_icon.as_ref(),
            s.position,
            s.orientation_deg + SPEAKER_ICON_ROTATION_OFFSET_DEG,
        );
    }
    draw_icon(
        &mut pm,
        assets.mic_icon.as_ref(),
        mic.position,
        mic.orientation_deg + MIC_ICON_ROTATION_OFFSET_DEG,
    );

    Some(pm)
}

/// Convert tiny-skia's premultiplied pixels to straight RGBA for
/// `CanvasRenderingContext2d::put_image_data`.
pub fn demultiplied_rgba(pm: &Pixmap) -> Vec<u8> {
    pm.pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}
