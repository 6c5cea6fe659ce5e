//! Shared test utilities for cq-db unit tests.

use cq_core::entities::{Article, Question, Research, Sentence, User};
use cq_core::enums::TieBreak;
use cq_core::identity::Actor;

use crate::CqDb;
use crate::service::CqService;

/// Create an in-memory `CqService` with the default tie-break.
pub async fn test_service() -> CqService {
    test_service_with(TieBreak::Earliest).await
}

/// Create an in-memory `CqService` with a specific tie-break.
pub async fn test_service_with(tie_break: TieBreak) -> CqService {
    let db = CqDb::open_local(":memory:").await.unwrap();
    CqService::from_db(db, tie_break)
}

/// Create a plain user and return the actor for it.
pub async fn test_actor(svc: &CqService, username: &str) -> Actor {
    let (user, _) = svc.create_user(username, None, false).await.unwrap();
    Actor::new(user.id)
}

/// A research with articles, three sentences per article, and one question.
pub struct Survey {
    pub researcher: User,
    pub research: Research,
    pub articles: Vec<Article>,
    pub sentences: Vec<Vec<Sentence>>,
    pub question: Question,
}

impl Survey {
    pub fn researcher_actor(&self) -> Actor {
        Actor::superuser(self.researcher.id.clone())
    }

    pub fn sentence_ids(&self, article: usize) -> Vec<String> {
        self.sentences[article].iter().map(|s| s.id.clone()).collect()
    }
}

/// Build a [`Survey`] with `article_count` articles.
pub async fn seed_survey(svc: &CqService, article_count: usize) -> Survey {
    let (researcher, _) = svc.create_user("researcher", None, true).await.unwrap();
    let research = svc
        .create_research("Reading comprehension", Some("Lab A"))
        .await
        .unwrap();

    let mut articles = Vec::new();
    let mut sentences = Vec::new();
    for i in 0..article_count {
        let article = svc
            .create_article(&research.id, &format!("Article {i}"))
            .await
            .unwrap();
        let mut article_sentences = Vec::new();
        for j in 0..3 {
            let sentence = svc
                .add_sentence(&article.id, &format!("Sentence {j} of article {i}."))
                .await
                .unwrap();
            article_sentences.push(sentence);
        }
        articles.push(article);
        sentences.push(article_sentences);
    }

    let question = svc
        .create_question(
            &Actor::superuser(researcher.id.clone()),
            &research.id,
            "Which sentence states the main claim?",
            Some("1"),
        )
        .await
        .unwrap();

    Survey {
        researcher,
        research,
        articles,
        sentences,
        question,
    }
}
