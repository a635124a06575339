// Pass/fail judgment of the current setup.

use super::overlap;
use super::scene::Scene;

pub const FEEDBACK_LIKELY_MSG: &str = "Feedback is likely. Adjust your setup to minimize overlap.";
pub const GREAT_SETUP_MSG: &str = "Great setup! Feedback is minimized.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
}

#[derive(Clone, Copy, Debug)]
pub struct Verdict {
    pub overlap_detected: bool,
    pub message: &'static str,
    pub severity: Severity,
}

pub fn evaluate(scene: &Scene) -> Verdict {
    if overlap::has_overlap(scene) {
        Verdict {
            overlap_detected: true,
            message: FEEDBACK_LIKELY_MSG,
            severity: Severity::Warning,
        }
    } else {
        Verdict {
            overlap_detected: false,
            message: GREAT_SETUP_MSG,
            severity: Severity::Ok,
        }
    }
}

/// Evaluate and fire the audible alert cue exactly when overlap is found.
/// The cue restarts from zero on the caller's side, so repeated checks are
/// safe.
pub fn evaluate_with_alert(scene: &Scene, alert: impl FnOnce()) -> Verdict {
    let verdict = evaluate(scene);
    if verdict.overlap_detected {
        alert();
    }
    verdict
}
