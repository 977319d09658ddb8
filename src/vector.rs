use crate::{
    foundation::math::{clamp01, lerp},
    phase::{Phase, PhaseProgress},
};

/// The full animated state for one progress sample.
///
/// Every field is a pure function of `(phase, local progress)`; the
/// rendering collaborator applies it however it likes. Units follow the
/// authored design: container size in percent / viewport-height percent,
/// corner radius and translations in pixels, opacities in [0,1].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimatedStateVector {
    pub width_pct: f64,
    pub height_vh: f64,
    pub corner_radius_px: f64,
    pub overlay_opacity: f64,
    pub overlay_translate_y: f64,
    pub overlay_scale: f64,
    pub media_scale: f64,
    pub scroll_indicator_opacity: f64,
    pub controls_overlay_opacity: f64,
    pub continue_indicator_opacity: f64,
    pub continue_indicator_translate_y: f64,
}

impl AnimatedStateVector {
    /// The pre-pin resting state: inset card with the overlay fully
    /// visible, controls and continue indicator hidden.
    pub fn initial() -> Self {
        interpolate(PhaseProgress {
            phase: Phase::Expansion,
            local: 0.0,
        })
    }
}

/// Compute the state vector for a resolved phase sample.
///
/// Local progress is pre-clamped so the engine never extrapolates outside
/// the authored ranges, and there is no internal accumulator: identical
/// inputs always produce identical output.
pub fn interpolate(pp: PhaseProgress) -> AnimatedStateVector {
    match pp.phase {
        Phase::Expansion => {
            let t = clamp01(pp.local);
            AnimatedStateVector {
                width_pct: lerp(60.0, 100.0, t),
                height_vh: lerp(60.0, 100.0, t),
                corner_radius_px: lerp(16.0, 0.0, t),
                overlay_opacity: lerp(1.0, 0.0, t),
                overlay_translate_y: lerp(0.0, -30.0, t),
                overlay_scale: lerp(1.0, 0.95, t),
                media_scale: lerp(1.0, 1.02, t),
                scroll_indicator_opacity: lerp(1.0, 0.0, t),
                // Held off until Viewing takes over.
                controls_overlay_opacity: 0.0,
                continue_indicator_opacity: 0.0,
                continue_indicator_translate_y: 20.0,
            }
        }
        Phase::Viewing => {
            let v = clamp01(pp.local);
            // Continue indicator only starts moving past the halfway mark;
            // before that it holds its phase-entry values.
            let (continue_opacity, continue_y) = if v > 0.5 {
                let c = clamp01((v - 0.5) * 2.0);
                (lerp(0.0, 1.0, c), lerp(20.0, 0.0, c))
            } else {
                (0.0, 20.0)
            };
            AnimatedStateVector {
                // Pinned at terminal expansion size: no further growth.
                width_pct: 100.0,
                height_vh: 100.0,
                corner_radius_px: 0.0,
                overlay_opacity: 0.0,
                overlay_translate_y: -30.0,
                overlay_scale: 0.95,
                // Bounded breathing oscillation, one period per traversal.
                media_scale: 1.02 + (v * std::f64::consts::TAU).sin() * 0.005,
                scroll_indicator_opacity: 0.0,
                // Fully visible after the first third of the phase.
                controls_overlay_opacity: lerp(0.0, 0.8, clamp01(v * 3.0)),
                continue_indicator_opacity: continue_opacity,
                continue_indicator_translate_y: continue_y,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expansion(t: f64) -> AnimatedStateVector {
        interpolate(PhaseProgress {
            phase: Phase::Expansion,
            local: t,
        })
    }

    fn viewing(v: f64) -> AnimatedStateVector {
        interpolate(PhaseProgress {
            phase: Phase::Viewing,
            local: v,
        })
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn expansion_start_matches_resting_state() {
        let s = expansion(0.0);
        assert_eq!(s.width_pct, 60.0);
        assert_eq!(s.height_vh, 60.0);
        assert_eq!(s.corner_radius_px, 16.0);
        assert_eq!(s.overlay_opacity, 1.0);
        assert_eq!(s.overlay_translate_y, 0.0);
        assert_eq!(s.overlay_scale, 1.0);
        assert_eq!(s.media_scale, 1.0);
        assert_eq!(s.scroll_indicator_opacity, 1.0);
        assert_eq!(s.controls_overlay_opacity, 0.0);
        assert_eq!(s.continue_indicator_opacity, 0.0);
        assert_eq!(s.continue_indicator_translate_y, 20.0);
        assert_eq!(s, AnimatedStateVector::initial());
    }

    #[test]
    fn expansion_midpoint() {
        let s = expansion(0.5);
        assert_eq!(s.width_pct, 80.0);
        assert_eq!(s.height_vh, 80.0);
        assert_eq!(s.corner_radius_px, 8.0);
        assert_eq!(s.overlay_opacity, 0.5);
        assert_eq!(s.overlay_translate_y, -15.0);
        assert!(close(s.overlay_scale, 0.975));
        assert!(close(s.media_scale, 1.01));
        assert_eq!(s.scroll_indicator_opacity, 0.5);
    }

    #[test]
    fn expansion_end_meets_viewing_start_for_shared_geometry() {
        let end = expansion(1.0);
        let start = viewing(0.0);
        assert_eq!(end.width_pct, start.width_pct);
        assert_eq!(end.height_vh, start.height_vh);
        assert_eq!(end.corner_radius_px, start.corner_radius_px);
        assert_eq!(end.overlay_opacity, start.overlay_opacity);
        assert_eq!(end.scroll_indicator_opacity, start.scroll_indicator_opacity);
        assert!(close(end.media_scale, start.media_scale));
    }

    #[test]
    fn controls_ramp_saturates_after_first_third() {
        assert!(close(viewing(0.0).controls_overlay_opacity, 0.0));
        assert!(close(viewing(1.0 / 6.0).controls_overlay_opacity, 0.4));
        assert!(close(viewing(1.0 / 3.0).controls_overlay_opacity, 0.8));
        assert!(close(viewing(0.5).controls_overlay_opacity, 0.8));
        assert!(close(viewing(1.0).controls_overlay_opacity, 0.8));
    }

    #[test]
    fn continue_indicator_holds_until_halfway() {
        for v in [0.0, 0.2, 0.5] {
            let s = viewing(v);
            assert_eq!(s.continue_indicator_opacity, 0.0);
            assert_eq!(s.continue_indicator_translate_y, 20.0);
        }
        let s = viewing(0.75);
        assert!(close(s.continue_indicator_opacity, 0.5));
        assert!(close(s.continue_indicator_translate_y, 10.0));
        let s = viewing(1.0);
        assert!(close(s.continue_indicator_opacity, 1.0));
        assert!(close(s.continue_indicator_translate_y, 0.0));
    }

    #[test]
    fn breathing_is_bounded_and_driftless() {
        for v in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            let scale = viewing(v).media_scale;
            assert!(scale >= 1.02 - 0.005 - 1e-12);
            assert!(scale <= 1.02 + 0.005 + 1e-12);
        }
        // One full period: both ends of the phase sit on the carrier value.
        assert!(close(viewing(0.0).media_scale, 1.02));
        assert!(close(viewing(1.0).media_scale, 1.02));
        assert!(close(viewing(0.25).media_scale, 1.025));
        assert!(close(viewing(0.75).media_scale, 1.015));
    }

    #[test]
    fn interpolate_is_idempotent() {
        for (phase, local) in [
            (Phase::Expansion, 0.37),
            (Phase::Expansion, 1.0),
            (Phase::Viewing, 0.62),
        ] {
            let pp = PhaseProgress { phase, local };
            assert_eq!(interpolate(pp), interpolate(pp));
        }
    }

    #[test]
    fn local_progress_never_extrapolates() {
        let s = expansion(7.0);
        assert_eq!(s.width_pct, 100.0);
        let s = expansion(-2.0);
        assert_eq!(s.width_pct, 60.0);
        let s = viewing(9.0);
        assert!(close(s.media_scale, 1.02));
        assert_eq!(s.continue_indicator_opacity, 1.0);
    }
}
