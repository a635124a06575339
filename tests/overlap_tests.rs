// Host-side tests for the compositing-based overlap engine and the scene
// renderer. The main crate is wasm-only, so we include the pure-Rust
// modules directly.

#![allow(dead_code)]
mod sim {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod overlap {
        include!("../src/core/overlap.rs");
    }
    pub mod render {
        include!("../src/core/render.rs");
    }
}

use glam::Vec2;
use sim::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, OVERLAP_RGBA};
use sim::geometry::PatternKind;
use sim::overlap::{coverage_with_markers, has_overlap, overlap_mask};
use sim::render::{demultiplied_rgba, render, Assets};
use sim::scene::Scene;

/// Default layout: mic at (400, 500) facing right, one speaker at
/// (200, 150) facing right. The shapes sit in opposite corners.
fn disjoint_scene() -> Scene {
    Scene::new()
}

/// Speaker dropped onto the mic position.
fn coincident_scene(orientation_deg: f32) -> Scene {
    let mut scene = Scene::new();
    let id = scene.speakers()[0].id;
    scene.set_speaker_position(id, scene.mic().position);
    scene.set_speaker_orientation(id, orientation_deg);
    scene
}

#[test]
fn far_apart_entities_do_not_overlap() {
    assert!(!has_overlap(&disjoint_scene()));
}

#[test]
fn cone_aimed_into_the_pickup_overlaps() {
    let mut scene = Scene::new();
    let id = scene.speakers()[0].id;
    // Directly above the mic, firing straight down into the pattern.
    scene.set_speaker_position(id, Vec2::new(400.0, 300.0));
    scene.set_speaker_orientation(id, 90.0);
    assert!(has_overlap(&scene));
}

#[test]
fn cone_aimed_away_does_not_overlap() {
    let mut scene = Scene::new();
    let id = scene.speakers()[0].id;
    // Above the mic but firing upward, away from it.
    scene.set_speaker_position(id, Vec2::new(400.0, 200.0));
    scene.set_speaker_orientation(id, 270.0);
    assert!(!has_overlap(&scene));
}

#[test]
fn speaker_on_the_mic_always_overlaps() {
    for orientation in [0.0, 90.0, 180.0, 270.0] {
        for pattern in [PatternKind::Omnidirectional, PatternKind::Cardioid] {
            let mut scene = coincident_scene(orientation);
            scene.set_mic_pattern(pattern);
            assert!(
                has_overlap(&scene),
                "{pattern:?} with cone at {orientation} degrees"
            );
        }
    }
}

#[test]
fn minimum_volume_still_detects_a_coincident_speaker() {
    let mut scene = coincident_scene(0.0);
    scene.set_volume(0); // clamps to the minimum, cone stays non-degenerate
    assert!(has_overlap(&scene));
}

#[test]
fn any_speaker_in_the_list_can_trigger_overlap() {
    let mut scene = Scene::new();
    let last = scene.add_speaker().unwrap();
    // First speaker stays in the far corner; only the new one is aimed in.
    scene.set_speaker_position(last, Vec2::new(400.0, 300.0));
    scene.set_speaker_orientation(last, 90.0);
    assert!(has_overlap(&scene));
}

#[test]
fn every_pattern_kind_participates_in_the_mask() {
    for pattern in PatternKind::ALL {
        let mut scene = coincident_scene(45.0);
        scene.set_mic_pattern(pattern);
        assert!(has_overlap(&scene), "{pattern:?} missing from the mask");
    }
}

#[test]
fn marker_colors_are_cosmetic() {
    let green = [0, 255, 0, 255];
    let blue = [0, 0, 255, 255];
    for scene in [disjoint_scene(), coincident_scene(0.0)] {
        let normal = coverage_with_markers(&scene, green, blue)
            .map(|pm| pm.pixels().iter().any(|p| p.alpha() > 0));
        let swapped = coverage_with_markers(&scene, blue, green)
            .map(|pm| pm.pixels().iter().any(|p| p.alpha() > 0));
        assert_eq!(normal, swapped);
    }
}

#[test]
fn mask_pixels_are_either_clear_or_pure_red() {
    let mask = overlap_mask(&coincident_scene(0.0)).unwrap();
    let mut covered = 0usize;
    for px in mask.data().chunks_exact(4) {
        let px: [u8; 4] = px.try_into().unwrap();
        if px[3] == 0 {
            assert_eq!(px, [0, 0, 0, 0]);
        } else {
            assert_eq!(px, OVERLAP_RGBA);
            covered += 1;
        }
    }
    assert!(covered > 0, "coincident scene produced an empty mask");
}

#[test]
fn mask_is_empty_exactly_when_no_overlap_is_reported() {
    for scene in [disjoint_scene(), coincident_scene(0.0)] {
        let mask = overlap_mask(&scene).unwrap();
        let any = mask.pixels().iter().any(|p| p.alpha() > 0);
        assert_eq!(any, has_overlap(&scene));
    }
}

#[test]
fn rendering_is_pixel_deterministic() {
    let scene = coincident_scene(30.0);
    let assets = Assets::default();
    let a = render(&scene, &assets).unwrap();
    let b = render(&scene, &assets).unwrap();
    assert_eq!(a.data(), b.data());
}

#[test]
fn render_covers_the_full_canvas() {
    let pm = render(&disjoint_scene(), &Assets::default()).unwrap();
    assert_eq!(pm.width(), CANVAS_WIDTH);
    assert_eq!(pm.height(), CANVAS_HEIGHT);
    let rgba = demultiplied_rgba(&pm);
    assert_eq!(rgba.len(), (CANVAS_WIDTH * CANVAS_HEIGHT * 4) as usize);
}

#[test]
fn visible_layer_shows_shapes_without_false_highlights() {
    let pm = render(&disjoint_scene(), &Assets::default()).unwrap();
    let mut tinted = 0usize;
    for px in pm.data().chunks_exact(4) {
        let px: [u8; 4] = px.try_into().unwrap();
        // No overlap anywhere, so nothing may be the opaque highlight red.
        assert_ne!(px, OVERLAP_RGBA);
        if px[3] > 0 {
            tinted += 1;
        }
    }
    assert!(tinted > 0, "translucent pattern layers missing");
}

#[test]
fn missing_icons_are_skipped_gracefully() {
    let scene = disjoint_scene();
    let without = render(&scene, &Assets::default()).unwrap();
    let mut icon = tiny_skia::Pixmap::new(8, 8).unwrap();
    icon.fill(tiny_skia::Color::from_rgba8(10, 20, 30, 255));
    let with = render(
        &scene,
        &Assets {
            speaker_icon: Some(icon),
            mic_icon: None,
        },
    )
    .unwrap();
    assert_ne!(without.data(), with.data());
}
