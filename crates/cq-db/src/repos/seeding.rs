//! Take creation with lineage seeding.

use cq_core::identity::Actor;
use cq_core::responses::{MilestoneDetail, TakeDetail};

use crate::error::DatabaseError;
use crate::service::CqService;

impl CqService {
    /// Create a take for `actor` on (`article_id`, `question_id`) with exactly
    /// one milestone.
    ///
    /// When a sibling take has an eligible milestone, the new milestone copies
    /// its `found` marker, records it in `copied_from`, and receives fresh
    /// responses on the same sentences in the same order, owned by `actor`.
    /// Otherwise the new milestone is empty.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown article, question or actor,
    /// and a validation error if the article and question belong to different
    /// researches. Nothing is persisted on error.
    pub async fn create_take_with_seed(
        &self,
        actor: &Actor,
        article_id: &str,
        question_id: &str,
    ) -> Result<TakeDetail, DatabaseError> {
        let tx = self.db().begin_immediate().await?;
        let result = self.seed_in_tx(actor, article_id, question_id).await;
        let detail = Self::finish(tx, result).await?;
        tracing::info!(
            take_id = %detail.take.id,
            copied_from = detail.milestones.first().and_then(|m| m.milestone.copied_from.as_deref()),
            "created take"
        );
        Ok(detail)
    }

    async fn seed_in_tx(
        &self,
        actor: &Actor,
        article_id: &str,
        question_id: &str,
    ) -> Result<TakeDetail, DatabaseError> {
        self.get_user(&actor.user_id).await?;
        let article = self.get_article(article_id).await?;
        let question = self.get_question(question_id).await?;
        if article.research_id != question.research_id {
            return Err(DatabaseError::validation(format!(
                "article {article_id} and question {question_id} belong to different researches"
            )));
        }

        let take = self
            .insert_take(&actor.user_id, article_id, question_id)
            .await?;

        let milestone = match self.resolve_latest_sibling_milestone(&take).await? {
            Some(source) => {
                let milestone = self
                    .insert_milestone(&take.id, &actor.user_id, source.found, Some(&source.id))
                    .await?;
                let mut responses = Vec::new();
                for original in self.list_responses(&source.id).await? {
                    responses.push(
                        self.insert_response(
                            &milestone.id,
                            &original.sentence_id,
                            &original.text,
                            &actor.user_id,
                        )
                        .await?,
                    );
                }
                MilestoneDetail {
                    milestone,
                    responses,
                }
            }
            None => MilestoneDetail {
                milestone: self
                    .insert_milestone(&take.id, &actor.user_id, None, None)
                    .await?,
                responses: Vec::new(),
            },
        };

        Ok(TakeDetail {
            take,
            milestones: vec![milestone],
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{seed_survey, test_actor, test_service};

    #[tokio::test]
    async fn first_take_gets_empty_milestone() {
        let svc = test_service().await;
        let survey = seed_survey(&svc, 2).await;
        let actor = test_actor(&svc, "p1").await;

        let detail = svc
            .create_take_with_seed(&actor, &survey.articles[0].id, &survey.question.id)
            .await
            .unwrap();

        assert_eq!(detail.milestones.len(), 1);
        let only = &detail.milestones[0];
        assert_eq!(only.milestone.found, None);
        assert_eq!(only.milestone.copied_from, None);
        assert!(only.responses.is_empty());
        assert_eq!(svc.get_take_detail(&detail.take.id).await.unwrap(), detail);
    }

    #[tokio::test]
    async fn seeds_from_sibling_article() {
        let svc = test_service().await;
        let survey = seed_survey(&svc, 2).await;
        let p1 = test_actor(&svc, "p1").await;
        let p2 = test_actor(&svc, "p2").await;

        let first = svc
            .create_take_with_seed(&p1, &survey.articles[0].id, &survey.question.id)
            .await
            .unwrap();
        let picked = survey.sentence_ids(0)[1..].to_vec();
        let source = svc
            .renew_milestone(&p1, &first.take.id, &picked, Some(chrono::Utc::now()))
            .await
            .unwrap();

        let second = svc
            .create_take_with_seed(&p2, &survey.articles[1].id, &survey.question.id)
            .await
            .unwrap();

        let seeded = &second.milestones[0];
        assert_eq!(
            seeded.milestone.copied_from.as_deref(),
            Some(source.milestone.id.as_str())
        );
        assert_eq!(seeded.milestone.found, source.milestone.found);
        assert_eq!(seeded.milestone.user_id, p2.user_id);

        let copied: Vec<_> = seeded.responses.iter().map(|r| r.sentence_id.clone()).collect();
        assert_eq!(copied, picked);
        for (copy, original) in seeded.responses.iter().zip(&source.responses) {
            assert_ne!(copy.id, original.id);
            assert_eq!(copy.user_id, p2.user_id);
            assert_eq!(copy.milestone_id, seeded.milestone.id);
        }
    }

    #[tokio::test]
    async fn mismatched_research_rejected() {
        let svc = test_service().await;
        let survey = seed_survey(&svc, 1).await;
        let other = svc.create_research("Other", None).await.unwrap();
        let question = svc
            .create_question(&survey.researcher_actor(), &other.id, "Elsewhere?", None)
            .await
            .unwrap();
        let actor = test_actor(&svc, "p1").await;

        let err = svc
            .create_take_with_seed(&actor, &survey.articles[0].id, &question.id)
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(
            svc.list_takes(&crate::repos::take::TakeFilter::default())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn unknown_article_is_not_found() {
        let svc = test_service().await;
        let survey = seed_survey(&svc, 1).await;
        let actor = test_actor(&svc, "p1").await;
        let err = svc
            .create_take_with_seed(&actor, "art-00000000", &survey.question.id)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
