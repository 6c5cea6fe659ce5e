//! Article assignment balancing.
//!
//! New participants are spread across a research's articles by always picking
//! the article with the fewest assigned profiles. The input is a materialized
//! list in article insertion order, so tie resolution is deterministic.

use crate::entities::ArticleLoad;
use crate::enums::TieBreak;
use crate::errors::CoreError;

/// Pick the least-assigned article of a research.
///
/// Visits `loads` in order and replaces the current pick only when a later
/// article has strictly fewer profiles, or an equal count under
/// [`TieBreak::Latest`].
///
/// # Errors
///
/// Returns `CoreError::EmptyCollection` if `loads` is empty.
pub fn least_assigned<'a>(
    research_id: &str,
    loads: &'a [ArticleLoad],
    tie_break: TieBreak,
) -> Result<&'a ArticleLoad, CoreError> {
    let (first, rest) = loads
        .split_first()
        .ok_or_else(|| CoreError::EmptyCollection {
            collection: "articles".to_string(),
            owner: format!("research {research_id}"),
        })?;

    Ok(rest.iter().fold(first, |best, next| {
        let fewer = next.profile_count < best.profile_count;
        let tied = next.profile_count == best.profile_count;
        if fewer || (tied && tie_break.replaces_on_tie()) {
            next
        } else {
            best
        }
    }))
}
