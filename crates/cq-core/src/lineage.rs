//! Milestone lineage resolution.
//!
//! A participant starting a take may inherit the most recent complete
//! milestone another participant produced for the same question on a
//! different article. Copies never seed further copies.

use crate::entities::LineageCandidate;
use crate::enums::TieBreak;

/// Select the eligible candidate with the greatest `response_at`.
///
/// `candidates` must be in stable order (sibling take insertion, then milestone
/// insertion). Ineligible candidates are skipped: no `found` marker, no
/// responses, or themselves a copy. Equal timestamps resolve per `tie_break`.
#[must_use]
pub fn latest_eligible(
    candidates: &[LineageCandidate],
    tie_break: TieBreak,
) -> Option<&LineageCandidate> {
    candidates
        .iter()
        .filter(|candidate| candidate.is_eligible())
        .reduce(|best, next| {
            let best_at = best.milestone.response_at;
            let next_at = next.milestone.response_at;
            if best_at < next_at || (best_at == next_at && tie_break.replaces_on_tie()) {
                next
            } else {
                best
            }
        })
}
