//! Article repository: CRUD plus the per-article profile load used for balancing.

use chrono::Utc;

use cq_core::entities::{Article, ArticleLoad};
use cq_core::enums::EntityType;
use cq_core::errors::CoreError;
use cq_core::ids::PREFIX_ARTICLE;

use crate::error::DatabaseError;
use crate::helpers::{fmt_datetime, get_count, get_datetime};
use crate::service::CqService;

const ARTICLE_COLS: &str = "id, research_id, title, created_at";

fn row_to_article(row: &libsql::Row) -> Result<Article, DatabaseError> {
    Ok(Article {
        id: row.get(0)?,
        research_id: row.get(1)?,
        title: row.get(2)?,
        created_at: get_datetime(row, 3)?,
    })
}

impl CqService {
    /// Create an article inside a research.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the research does not exist.
    pub async fn create_article(
        &self,
        research_id: &str,
        title: &str,
    ) -> Result<Article, DatabaseError> {
        self.get_research(research_id).await?;
        if title.trim().is_empty() {
            return Err(DatabaseError::validation("article title must not be empty"));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_ARTICLE).await?;
        self.db()
            .execute(
                "INSERT INTO articles (id, research_id, title, created_at) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![id.as_str(), research_id, title, fmt_datetime(&now)],
            )
            .await?;

        Ok(Article {
            id,
            research_id: research_id.to_string(),
            title: title.to_string(),
            created_at: now,
        })
    }

    /// Get an article by ID.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the article does not exist.
    pub async fn get_article(&self, id: &str) -> Result<Article, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {ARTICLE_COLS} FROM articles WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::Article, id))?;
        row_to_article(&row)
    }

    /// List the articles of a research in creation order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_articles(&self, research_id: &str) -> Result<Vec<Article>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {ARTICLE_COLS} FROM articles WHERE research_id = ?1 ORDER BY rowid"
                ),
                [research_id],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_article(&row)?);
        }
        Ok(items)
    }

    /// Every article of a research with its assigned-profile count, in article
    /// creation order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn article_loads(&self, research_id: &str) -> Result<Vec<ArticleLoad>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT a.id, a.research_id, a.title, a.created_at,
                        (SELECT COUNT(*) FROM profiles p WHERE p.article_id = a.id)
                 FROM articles a
                 WHERE a.research_id = ?1
                 ORDER BY a.rowid",
                [research_id],
            )
            .await?;

        let mut loads = Vec::new();
        while let Some(row) = rows.next().await? {
            loads.push(ArticleLoad {
                article: row_to_article(&row)?,
                profile_count: get_count(&row, 4)?,
            });
        }
        Ok(loads)
    }
}
