use crate::{
    foundation::error::{PinscrubError, PinscrubResult},
    foundation::math::clamp01,
};

/// The ordered, exhaustive partition of the [0,1] progress domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Media container grows from its inset card to full viewport.
    Expansion,
    /// Container is held at full size while overlays hand off.
    Viewing,
}

/// Progress resolved into a phase plus progress renormalized to that
/// phase's own [0,1] range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseProgress {
    pub phase: Phase,
    /// Phase-local progress in [0,1]; reaches exactly 0 and 1 at the
    /// phase's own boundaries.
    pub local: f64,
}

/// The seam between the two phases.
///
/// Validated at setup so a bad boundary is fatal at init, never a surprise
/// on the first scroll event.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct PhaseTable {
    /// Upper boundary of `Expansion` / lower boundary of `Viewing`.
    pub seam: f64,
}

impl Default for PhaseTable {
    fn default() -> Self {
        Self { seam: 0.7 }
    }
}

impl PhaseTable {
    pub fn new(seam: f64) -> PinscrubResult<Self> {
        let table = Self { seam };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> PinscrubResult<()> {
        if !self.seam.is_finite() || self.seam <= 0.0 || self.seam >= 1.0 {
            return Err(PinscrubError::validation(
                "phase seam must lie strictly inside (0, 1)",
            ));
        }
        Ok(())
    }

    /// Resolve normalized progress into exactly one phase.
    ///
    /// Tie-break: progress equal to the seam belongs to `Expansion`, so the
    /// seam frame shows the terminal expansion values rather than flickering
    /// into `Viewing` for one event.
    pub fn resolve(&self, progress: f64) -> PhaseProgress {
        let p = clamp01(progress);
        if p <= self.seam {
            PhaseProgress {
                phase: Phase::Expansion,
                local: clamp01(p / self.seam),
            }
        } else {
            PhaseProgress {
                phase: Phase::Viewing,
                local: clamp01((p - self.seam) / (1.0 - self.seam)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_is_exhaustive_with_local_in_range() {
        let table = PhaseTable::default();
        let mut p = 0.0;
        while p <= 1.0 {
            let pp = table.resolve(p);
            assert!(pp.local >= 0.0 && pp.local <= 1.0, "p={p}");
            match pp.phase {
                Phase::Expansion => assert!(p <= 0.7),
                Phase::Viewing => assert!(p > 0.7),
            }
            p += 0.001;
        }
    }

    #[test]
    fn local_progress_hits_exact_boundaries() {
        let table = PhaseTable::default();
        assert_eq!(table.resolve(0.0).local, 0.0);
        assert_eq!(table.resolve(0.7).local, 1.0);
        assert_eq!(table.resolve(1.0).local, 1.0);
    }

    #[test]
    fn seam_tie_break_is_expansion() {
        // Regression pin: 0.7 exactly resolves to Expansion, every time.
        let table = PhaseTable::default();
        for _ in 0..8 {
            assert_eq!(table.resolve(0.7).phase, Phase::Expansion);
        }
        assert_eq!(table.resolve(0.7 + 1e-9).phase, Phase::Viewing);
    }

    #[test]
    fn out_of_range_progress_is_clamped_not_rejected() {
        let table = PhaseTable::default();
        assert_eq!(table.resolve(-3.0).phase, Phase::Expansion);
        assert_eq!(table.resolve(-3.0).local, 0.0);
        assert_eq!(table.resolve(42.0).phase, Phase::Viewing);
        assert_eq!(table.resolve(42.0).local, 1.0);
        assert_eq!(table.resolve(f64::NAN).phase, Phase::Expansion);
    }

    #[test]
    fn seam_is_validated_at_setup() {
        assert!(PhaseTable::new(0.0).is_err());
        assert!(PhaseTable::new(1.0).is_err());
        assert!(PhaseTable::new(-0.2).is_err());
        assert!(PhaseTable::new(f64::NAN).is_err());
        assert!(PhaseTable::new(0.7).is_ok());
    }
}
