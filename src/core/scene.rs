// Entity state for the venue: one microphone, an ordered speaker list and
// the shared volume. The frontend mutates this through the setters below;
// the renderer and overlap engine only ever see `&Scene` snapshots.

use glam::Vec2;
use smallvec::SmallVec;

use super::constants::{
    ICON_HIT_RADIUS, MAX_SPEAKERS, MIC_DEFAULT_POS, MIN_SPEAKERS, SPEAKER_COLUMN_SPACING,
    SPEAKER_ROW_Y, VOLUME_DEFAULT, VOLUME_MAX, VOLUME_MIN,
};
use super::geometry::PatternKind;

#[derive(Clone, Copy, Debug)]
pub struct Speaker {
    pub position: Vec2,
    pub orientation_deg: f32,
    pub id: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct Mic {
    pub position: Vec2,
    pub orientation_deg: f32,
    pub pattern: PatternKind,
}

/// A draggable entity, as resolved by [`Scene::hit_test`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Mic,
    Speaker(u32),
}

#[derive(Clone, Debug)]
pub struct Scene {
    mic: Mic,
    speakers: SmallVec<[Speaker; MAX_SPEAKERS]>,
    volume: i32,
    next_id: u32,
}

/// Wrap an arbitrary degree value into [0, 360). 360 maps to 0.
fn wrap_deg(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

impl Scene {
    /// A fresh venue: mic at the front, one speaker in the default row.
    pub fn new() -> Self {
        let mut scene = Self {
            mic: Mic {
                position: Vec2::from_array(MIC_DEFAULT_POS),
                orientation_deg: 0.0,
                pattern: PatternKind::Cardioid,
            },
            speakers: SmallVec::new(),
            volume: VOLUME_DEFAULT,
            next_id: 0,
        };
        scene.add_speaker();
        scene
    }

    pub fn mic(&self) -> &Mic {
        &self.mic
    }

    pub fn speakers(&self) -> &[Speaker] {
        &self.speakers
    }

    pub fn volume(&self) -> i32 {
        self.volume
    }

    /// Pickup pattern scale grows with the shared volume.
    pub fn pickup_scale(&self) -> f32 {
        1.0 + self.volume as f32 / 100.0
    }

    /// Emission cone radius in pixels.
    pub fn cone_radius(&self) -> f32 {
        self.volume as f32 * super::constants::CONE_RADIUS_PER_VOLUME
    }

    pub fn set_mic_position(&mut self, pos: Vec2) {
        self.mic.position = pos;
    }

    pub fn set_mic_orientation(&mut self, deg: f32) {
        self.mic.orientation_deg = wrap_deg(deg);
    }

    pub fn set_mic_pattern(&mut self, pattern: PatternKind) {
        self.mic.pattern = pattern;
    }

    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(VOLUME_MIN, VOLUME_MAX);
    }

    /// Append a speaker at the next slot in the default row. Silently does
    /// nothing at capacity. Returns the new speaker's id.
    pub fn add_speaker(&mut self) -> Option<u32> {
        if self.speakers.len() >= MAX_SPEAKERS {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        let slot = self.speakers.len() as f32 + 1.0;
        self.speakers.push(Speaker {
            position: Vec2::new(100.0 + slot * SPEAKER_COLUMN_SPACING, SPEAKER_ROW_Y),
            orientation_deg: 0.0,
            id,
        });
        Some(id)
    }

    /// Remove the most recently added speaker. Silently does nothing while
    /// only the minimum remains. Returns the removed speaker's id.
    pub fn remove_speaker(&mut self) -> Option<u32> {
        if self.speakers.len() <= MIN_SPEAKERS {
            return None;
        }
        self.speakers.pop().map(|s| s.id)
    }

    pub fn set_speaker_position(&mut self, id: u32, pos: Vec2) {
        if let Some(s) = self.speakers.iter_mut().find(|s| s.id == id) {
            s.position = pos;
        }
    }

    pub fn set_speaker_orientation(&mut self, id: u32, deg: f32) {
        if let Some(s) = self.speakers.iter_mut().find(|s| s.id == id) {
            s.orientation_deg = wrap_deg(deg);
        }
    }

    /// Resolve which entity a pointer position grabs, mic first, then
    /// speakers in insertion order, within the icon radius.
    pub fn hit_test(&self, pos: Vec2) -> Option<Target> {
        let r2 = ICON_HIT_RADIUS * ICON_HIT_RADIUS;
        if self.mic.position.distance_squared(pos) < r2 {
            return Some(Target::Mic);
        }
        self.speakers
            .iter()
            .find(|s| s.position.distance_squared(pos) < r2)
            .map(|s| Target::Speaker(s.id))
    }

    pub fn target_position(&self, target: Target) -> Option<Vec2> {
        match target {
            Target::Mic => Some(self.mic.position),
            Target::Speaker(id) => self
                .speakers
                .iter()
                .find(|s| s.id == id)
                .map(|s| s.position),
        }
    }

    pub fn set_target_position(&mut self, target: Target, pos: Vec2) {
        match target {
            Target::Mic => self.set_mic_position(pos),
            Target::Speaker(id) => self.set_speaker_position(id, pos),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
