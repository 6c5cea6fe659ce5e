//! Milestone renewal: snapshot a new set of highlighted sentences on a take.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use cq_core::identity::Actor;
use cq_core::responses::MilestoneDetail;

use crate::error::DatabaseError;
use crate::service::CqService;

impl CqService {
    /// Create a new milestone on `take_id` holding one response per entry of
    /// `sentence_ids`, in order. Duplicates are kept. An empty list yields a
    /// milestone without responses.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown take or actor, and a
    /// validation error if the take is removed or any sentence is not part of
    /// the take's article. Nothing is persisted on error.
    pub async fn renew_milestone(
        &self,
        actor: &Actor,
        take_id: &str,
        sentence_ids: &[String],
        found: Option<DateTime<Utc>>,
    ) -> Result<MilestoneDetail, DatabaseError> {
        let tx = self.db().begin_immediate().await?;
        let result = self.renew_in_tx(actor, take_id, sentence_ids, found).await;
        let detail = Self::finish(tx, result).await?;
        tracing::info!(
            take_id,
            milestone_id = %detail.milestone.id,
            responses = detail.responses.len(),
            "renewed milestone"
        );
        Ok(detail)
    }

    async fn renew_in_tx(
        &self,
        actor: &Actor,
        take_id: &str,
        sentence_ids: &[String],
        found: Option<DateTime<Utc>>,
    ) -> Result<MilestoneDetail, DatabaseError> {
        self.get_user(&actor.user_id).await?;
        let take = self.get_take(take_id).await?;
        if take.is_removed() {
            return Err(DatabaseError::validation(format!(
                "take {take_id} has been removed"
            )));
        }
        self.ensure_sentences_in_article(&take.article_id, sentence_ids)
            .await?;

        let texts: HashMap<String, String> = self
            .list_sentences(&take.article_id)
            .await?
            .into_iter()
            .map(|s| (s.id, s.text))
            .collect();

        let mut milestone = self
            .insert_milestone(&take.id, &actor.user_id, found, None)
            .await?;
        let mut responses = Vec::with_capacity(sentence_ids.len());
        for sentence_id in sentence_ids {
            let text = texts.get(sentence_id).map_or("", String::as_str);
            responses.push(
                self.insert_response(&milestone.id, sentence_id, text, &actor.user_id)
                    .await?,
            );
        }
        if let Some(last) = responses.last() {
            self.advance_response_at(&milestone.id, &last.created_at)
                .await?;
            milestone.response_at = last.created_at;
        }
        self.touch_take(&take.id).await?;

        Ok(MilestoneDetail {
            milestone,
            responses,
        })
    }
}
