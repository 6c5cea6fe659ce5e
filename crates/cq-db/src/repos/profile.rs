//! Profile repository: one profile per user, optionally linked to an article.

use chrono::Utc;

use cq_core::entities::Profile;
use cq_core::enums::EntityType;
use cq_core::errors::CoreError;
use cq_core::ids::PREFIX_PROFILE;

use crate::error::DatabaseError;
use crate::helpers::{fmt_datetime, get_datetime, get_opt_string};
use crate::service::CqService;

/// `research_id` is derived from the linked article, never stored.
const PROFILE_SELECT: &str = "SELECT p.id, p.user_id, p.article_id, a.research_id, p.created_at, p.updated_at
     FROM profiles p LEFT JOIN articles a ON a.id = p.article_id";

fn row_to_profile(row: &libsql::Row) -> Result<Profile, DatabaseError> {
    Ok(Profile {
        id: row.get(0)?,
        user_id: row.get(1)?,
        article_id: get_opt_string(row, 2)?,
        research_id: get_opt_string(row, 3)?,
        created_at: get_datetime(row, 4)?,
        updated_at: get_datetime(row, 5)?,
    })
}

impl CqService {
    /// Insert an unassigned profile for `user_id`. Caller owns the transaction.
    pub(crate) async fn insert_profile(&self, user_id: &str) -> Result<Profile, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PROFILE).await?;
        self.db()
            .execute(
                "INSERT INTO profiles (id, user_id, article_id, created_at, updated_at)
                 VALUES (?1, ?2, NULL, ?3, ?3)",
                libsql::params![id.as_str(), user_id, fmt_datetime(&now)],
            )
            .await?;
        Ok(Profile {
            id,
            user_id: user_id.to_string(),
            article_id: None,
            research_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get the profile of a user.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the user has no profile.
    pub async fn get_profile_for_user(&self, user_id: &str) -> Result<Profile, DatabaseError> {
        let mut rows = self
            .db()
            .query(&format!("{PROFILE_SELECT} WHERE p.user_id = ?1"), [user_id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::Profile, user_id))?;
        row_to_profile(&row)
    }

    /// Link (or unlink, with `None`) a user's profile to an article.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the user or the article does not exist.
    pub async fn set_profile_article(
        &self,
        user_id: &str,
        article_id: Option<&str>,
    ) -> Result<Profile, DatabaseError> {
        if let Some(article_id) = article_id {
            self.get_article(article_id).await?;
        }
        let changed = self
            .db()
            .execute(
                "UPDATE profiles SET article_id = ?1, updated_at = ?2 WHERE user_id = ?3",
                libsql::params![article_id, fmt_datetime(&Utc::now()), user_id],
            )
            .await?;
        if changed == 0 {
            return Err(CoreError::not_found(EntityType::Profile, user_id).into());
        }
        self.get_profile_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_survey, test_service};

    #[tokio::test]
    async fn research_id_follows_article() {
        let svc = test_service().await;
        let survey = seed_survey(&svc, 2).await;
        let (user, _) = svc.create_user("dana", None, false).await.unwrap();

        let profile = svc
            .set_profile_article(&user.id, Some(&survey.articles[1].id))
            .await
            .unwrap();
        assert_eq!(profile.article_id.as_deref(), Some(survey.articles[1].id.as_str()));
        assert_eq!(profile.research_id.as_deref(), Some(survey.research.id.as_str()));

        let cleared = svc.set_profile_article(&user.id, None).await.unwrap();
        assert_eq!(cleared.article_id, None);
        assert_eq!(cleared.research_id, None);
    }

    #[tokio::test]
    async fn unknown_article_rejected() {
        let svc = test_service().await;
        let (user, _) = svc.create_user("erin", None, false).await.unwrap();
        let err = svc
            .set_profile_article(&user.id, Some("art-00000000"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn unknown_user_profile_not_found() {
        let svc = test_service().await;
        let err = svc.get_profile_for_user("usr-00000000").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
