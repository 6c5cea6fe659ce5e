//! Article balancing and participant registration.

use cq_core::assignment::least_assigned;
use cq_core::entities::Article;
use cq_core::responses::Registration;

use crate::error::DatabaseError;
use crate::service::CqService;

impl CqService {
    /// Pick the article of `research_id` with the fewest assigned profiles.
    ///
    /// Read-only; callers that link a profile to the result should do both
    /// inside one transaction (see [`CqService::register_participant`]).
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown research and an
    /// empty-collection error if the research has no articles.
    pub async fn balance_assign(&self, research_id: &str) -> Result<Article, DatabaseError> {
        self.get_research(research_id).await?;
        let loads = self.article_loads(research_id).await?;
        let picked = least_assigned(research_id, &loads, self.tie_break())?;
        tracing::debug!(
            research_id,
            article_id = %picked.article.id,
            profile_count = picked.profile_count,
            "balanced article assignment"
        );
        Ok(picked.article.clone())
    }

    /// Register a participant: create the user and profile, balance them onto
    /// an article of `research_id`, and link the profile to it.
    ///
    /// Runs in one `IMMEDIATE` transaction so concurrent registrations on the
    /// same research observe each other's assignments.
    ///
    /// # Errors
    ///
    /// Returns a validation error when no research is given or the username is
    /// taken, a not-found error for an unknown research, and an
    /// empty-collection error for a research without articles. Nothing is
    /// persisted on error.
    pub async fn register_participant(
        &self,
        username: &str,
        email: Option<&str>,
        research_id: Option<&str>,
    ) -> Result<Registration, DatabaseError> {
        let research_id = research_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| DatabaseError::validation("Select any research type."))?;

        let tx = self.db().begin_immediate().await?;
        let result = self.register_in_tx(username, email, research_id).await;
        let registration = Self::finish(tx, result).await?;
        tracing::info!(
            user_id = %registration.user.id,
            article_id = %registration.article.id,
            "registered participant"
        );
        Ok(registration)
    }

    async fn register_in_tx(
        &self,
        username: &str,
        email: Option<&str>,
        research_id: &str,
    ) -> Result<Registration, DatabaseError> {
        let article = self.balance_assign(research_id).await?;
        let (user, _) = self.insert_user(username, email, false).await?;
        let profile = self.set_profile_article(&user.id, Some(&article.id)).await?;
        Ok(Registration {
            user,
            profile,
            article,
        })
    }
}

#[cfg(test)]
mod tests {
    use cq_core::enums::TieBreak;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::{seed_survey, test_service, test_service_with};

    #[tokio::test]
    async fn registrations_spread_evenly() {
        let svc = test_service().await;
        let survey = seed_survey(&svc, 3).await;

        let mut assigned = Vec::new();
        for i in 0..6 {
            let registration = svc
                .register_participant(&format!("p{i}"), None, Some(&survey.research.id))
                .await
                .unwrap();
            assert_eq!(
                registration.profile.article_id.as_deref(),
                Some(registration.article.id.as_str())
            );
            assigned.push(registration.article.id);
        }

        let expected: Vec<_> = survey
            .articles
            .iter()
            .chain(survey.articles.iter())
            .map(|a| a.id.clone())
            .collect();
        assert_eq!(assigned, expected);
    }

    #[rstest]
    #[case(TieBreak::Earliest, 0)]
    #[case(TieBreak::Latest, 2)]
    #[tokio::test]
    async fn tie_break_decides_between_empty_articles(
        #[case] tie_break: TieBreak,
        #[case] expected: usize,
    ) {
        let svc = test_service_with(tie_break).await;
        let survey = seed_survey(&svc, 3).await;
        let article = svc.balance_assign(&survey.research.id).await.unwrap();
        assert_eq!(article.id, survey.articles[expected].id);
    }

    #[tokio::test]
    async fn missing_research_is_validation_error() {
        let svc = test_service().await;
        let err = svc.register_participant("p1", None, None).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Select any research type.");
    }

    #[tokio::test]
    async fn research_without_articles_persists_nothing() {
        let svc = test_service().await;
        let research = svc.create_research("Empty", None).await.unwrap();

        let err = svc
            .register_participant("p1", None, Some(&research.id))
            .await
            .unwrap_err();
        assert!(err.is_empty_collection());
        assert!(svc.get_user_by_username("p1").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn unknown_research_is_not_found() {
        let svc = test_service().await;
        let err = svc
            .register_participant("p1", None, Some("rsc-00000000"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
