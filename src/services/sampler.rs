use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::cascade::Phases;
use crate::models::{Phase, TitleRecord};

/// Titles drawn from the first non-empty phase
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection<'a> {
    /// `None` when every phase was empty
    pub phase: Option<Phase>,
    pub records: Vec<&'a TitleRecord>,
}

/// Seed used when sampling from `phase`; each phase gets its own constant
pub fn phase_seed(seed_base: u64, phase: Phase) -> u64 {
    seed_base.wrapping_add(u64::from(phase.number() - 1))
}

/// Draws up to `limit` distinct candidates
pub fn draw<'a, R: Rng + ?Sized>(
    candidates: &[&'a TitleRecord],
    limit: usize,
    rng: &mut R,
) -> Vec<&'a TitleRecord> {
    candidates.choose_multiple(rng, limit).copied().collect()
}

/// Samples from the first non-empty phase, in cascade order
///
/// The generator is reseeded per phase, so identical catalogs and inputs
/// always produce the same selection.
pub fn select<'a>(phases: &Phases<'a>, seed_base: u64, limit: usize) -> Selection<'a> {
    for phase in Phase::ORDER {
        let candidates = phases.candidates(phase);
        if candidates.is_empty() {
            continue;
        }

        let mut rng = ChaCha8Rng::seed_from_u64(phase_seed(seed_base, phase));
        return Selection {
            phase: Some(phase),
            records: draw(candidates, limit, &mut rng),
        };
    }

    Selection::default()
}
