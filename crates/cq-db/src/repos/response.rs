//! Response repository: individual highlighted sentences within a milestone.
//!
//! `responses` rows carry no text of their own; every read joins `sentences`
//! so the returned [`Response`] includes the referenced sentence text.

use chrono::Utc;

use cq_core::entities::Response;
use cq_core::enums::EntityType;
use cq_core::errors::CoreError;
use cq_core::identity::Actor;
use cq_core::ids::PREFIX_RESPONSE;

use crate::error::DatabaseError;
use crate::helpers::{fmt_datetime, get_datetime};
use crate::service::CqService;

const RESPONSE_SELECT: &str = "SELECT r.id, r.milestone_id, r.sentence_id, r.user_id, s.text, r.created_at
     FROM responses r JOIN sentences s ON s.id = r.sentence_id";

fn row_to_response(row: &libsql::Row) -> Result<Response, DatabaseError> {
    Ok(Response {
        id: row.get(0)?,
        milestone_id: row.get(1)?,
        sentence_id: row.get(2)?,
        user_id: row.get(3)?,
        text: row.get(4)?,
        created_at: get_datetime(row, 5)?,
    })
}

impl CqService {
    /// Insert a response row. `text` is the referenced sentence's text, echoed
    /// into the returned value. Caller owns the transaction and validation.
    pub(crate) async fn insert_response(
        &self,
        milestone_id: &str,
        sentence_id: &str,
        text: &str,
        user_id: &str,
    ) -> Result<Response, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_RESPONSE).await?;
        self.db()
            .execute(
                "INSERT INTO responses (id, milestone_id, sentence_id, user_id, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![id.as_str(), milestone_id, sentence_id, user_id, fmt_datetime(&now)],
            )
            .await?;

        Ok(Response {
            id,
            milestone_id: milestone_id.to_string(),
            sentence_id: sentence_id.to_string(),
            user_id: user_id.to_string(),
            text: text.to_string(),
            created_at: now,
        })
    }

    /// Add one highlighted sentence to an existing milestone and advance the
    /// milestone's `response_at`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown milestone or actor, and a
    /// validation error if the sentence is not part of the take's article.
    pub async fn create_response(
        &self,
        actor: &Actor,
        milestone_id: &str,
        sentence_id: &str,
    ) -> Result<Response, DatabaseError> {
        let tx = self.db().begin_immediate().await?;
        let result = self.add_response(actor, milestone_id, sentence_id).await;
        Self::finish(tx, result).await
    }

    async fn add_response(
        &self,
        actor: &Actor,
        milestone_id: &str,
        sentence_id: &str,
    ) -> Result<Response, DatabaseError> {
        self.get_user(&actor.user_id).await?;
        let milestone = self.get_milestone(milestone_id).await?;
        let take = self.get_take(&milestone.take_id).await?;
        self.ensure_sentences_in_article(&take.article_id, &[sentence_id.to_string()])
            .await?;
        let sentence = self.get_sentence(sentence_id).await?;

        let response = self
            .insert_response(milestone_id, sentence_id, &sentence.text, &actor.user_id)
            .await?;
        self.advance_response_at(milestone_id, &response.created_at)
            .await?;
        self.touch_take(&take.id).await?;
        Ok(response)
    }

    /// Get a response by ID.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the response does not exist.
    pub async fn get_response(&self, id: &str) -> Result<Response, DatabaseError> {
        let mut rows = self
            .db()
            .query(&format!("{RESPONSE_SELECT} WHERE r.id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::Response, id))?;
        row_to_response(&row)
    }

    /// List the responses of a milestone in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_responses(&self, milestone_id: &str) -> Result<Vec<Response>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("{RESPONSE_SELECT} WHERE r.milestone_id = ?1 ORDER BY r.rowid"),
                [milestone_id],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_response(&row)?);
        }
        Ok(items)
    }

    /// Delete a response.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the response does not exist.
    pub async fn delete_response(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .execute("DELETE FROM responses WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(CoreError::not_found(EntityType::Response, id).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{seed_survey, test_actor, test_service};

    #[tokio::test]
    async fn create_response_joins_sentence_text_and_bumps_response_at() {
        let svc = test_service().await;
        let survey = seed_survey(&svc, 1).await;
        let actor = test_actor(&svc, "p1").await;
        let take = svc
            .insert_take(&actor.user_id, &survey.articles[0].id, &survey.question.id)
            .await
            .unwrap();
        let milestone = svc
            .insert_milestone(&take.id, &actor.user_id, None, None)
            .await
            .unwrap();

        let sentence = &survey.sentences[0][2];
        let response = svc
            .create_response(&actor, &milestone.id, &sentence.id)
            .await
            .unwrap();
        assert!(response.id.starts_with("rsp-"));
        assert_eq!(response.text, sentence.text);
        assert_eq!(svc.get_response(&response.id).await.unwrap(), response);

        let refreshed = svc.get_milestone(&milestone.id).await.unwrap();
        assert_eq!(refreshed.response_at, response.created_at);
    }

    #[tokio::test]
    async fn sentence_from_other_article_rejected() {
        let svc = test_service().await;
        let survey = seed_survey(&svc, 2).await;
        let actor = test_actor(&svc, "p1").await;
        let take = svc
            .insert_take(&actor.user_id, &survey.articles[0].id, &survey.question.id)
            .await
            .unwrap();
        let milestone = svc
            .insert_milestone(&take.id, &actor.user_id, None, None)
            .await
            .unwrap();

        let err = svc
            .create_response(&actor, &milestone.id, &survey.sentences[1][0].id)
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(svc.list_responses(&milestone.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_response() {
        let svc = test_service().await;
        let survey = seed_survey(&svc, 1).await;
        let actor = test_actor(&svc, "p1").await;
        let take = svc
            .insert_take(&actor.user_id, &survey.articles[0].id, &survey.question.id)
            .await
            .unwrap();
        let milestone = svc
            .insert_milestone(&take.id, &actor.user_id, None, None)
            .await
            .unwrap();
        let response = svc
            .create_response(&actor, &milestone.id, &survey.sentences[0][0].id)
            .await
            .unwrap();

        svc.delete_response(&response.id).await.unwrap();
        assert!(svc.get_response(&response.id).await.unwrap_err().is_not_found());
        assert!(svc.delete_response(&response.id).await.unwrap_err().is_not_found());
    }
}
