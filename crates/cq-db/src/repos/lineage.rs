//! Sibling milestone lookup for seeding and suggestions.
//!
//! Siblings of a take are the takes answering the same question on a
//! different article. Candidates are loaded in a stable order (take insertion,
//! then milestone insertion) and handed to [`latest_eligible`].

use cq_core::entities::{LineageCandidate, Milestone, Take};
use cq_core::lineage::latest_eligible;
use cq_core::responses::SuggestionsResponse;

use crate::error::DatabaseError;
use crate::helpers::get_count;
use crate::repos::milestone::{MILESTONE_COLS_M, row_to_milestone};
use crate::service::CqService;

impl CqService {
    /// Every milestone of every sibling take of `take`, with its response count.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn sibling_candidates(
        &self,
        take: &Take,
    ) -> Result<Vec<LineageCandidate>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {MILESTONE_COLS_M},
                            (SELECT COUNT(*) FROM responses r WHERE r.milestone_id = m.id)
                     FROM milestones m
                     JOIN takes t ON t.id = m.take_id
                     WHERE t.question_id = ?1 AND t.article_id <> ?2 AND t.id <> ?3
                     ORDER BY t.rowid, m.rowid"
                ),
                libsql::params![
                    take.question_id.as_str(),
                    take.article_id.as_str(),
                    take.id.as_str()
                ],
            )
            .await?;

        let mut candidates = Vec::new();
        while let Some(row) = rows.next().await? {
            candidates.push(LineageCandidate {
                milestone: row_to_milestone(&row)?,
                response_count: get_count(&row, 7)?,
            });
        }
        Ok(candidates)
    }

    /// The most recent complete, non-copied milestone among `take`'s siblings.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the candidate query fails.
    pub async fn resolve_latest_sibling_milestone(
        &self,
        take: &Take,
    ) -> Result<Option<Milestone>, DatabaseError> {
        let candidates = self.sibling_candidates(take).await?;
        let picked = latest_eligible(&candidates, self.tie_break()).map(|c| c.milestone.clone());
        tracing::debug!(
            take_id = %take.id,
            candidates = candidates.len(),
            source = picked.as_ref().map(|m| m.id.as_str()),
            "resolved sibling milestone"
        );
        Ok(picked)
    }

    /// Responses of the winning sibling milestone for an existing take, or an
    /// empty list when no sibling qualifies.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the take does not exist.
    pub async fn suggestions(&self, take_id: &str) -> Result<SuggestionsResponse, DatabaseError> {
        let take = self.get_take(take_id).await?;
        let source = self.resolve_latest_sibling_milestone(&take).await?;
        let responses = match source {
            Some(ref milestone) => self.list_responses(&milestone.id).await?,
            None => Vec::new(),
        };
        Ok(SuggestionsResponse {
            take_id: take.id,
            source_milestone_id: source.map(|m| m.id),
            responses,
        })
    }
}
