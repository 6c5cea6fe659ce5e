//! Sentence repository: ordered, append-only units of article text.

use std::collections::HashSet;

use chrono::Utc;

use cq_core::entities::Sentence;
use cq_core::enums::EntityType;
use cq_core::errors::CoreError;
use cq_core::ids::PREFIX_SENTENCE;

use crate::error::DatabaseError;
use crate::helpers::{fmt_datetime, get_datetime};
use crate::service::CqService;

const SENTENCE_COLS: &str = "id, article_id, position, text, created_at";

fn get_position(row: &libsql::Row, idx: i32) -> Result<u32, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u32::try_from(raw)
        .map_err(|_| DatabaseError::InvalidState(format!("sentence position {raw} out of range")))
}

fn row_to_sentence(row: &libsql::Row) -> Result<Sentence, DatabaseError> {
    Ok(Sentence {
        id: row.get(0)?,
        article_id: row.get(1)?,
        position: get_position(row, 2)?,
        text: row.get(3)?,
        created_at: get_datetime(row, 4)?,
    })
}

impl CqService {
    /// Append a sentence to an article. Positions are assigned 0, 1, 2, ...
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the article does not exist.
    pub async fn add_sentence(&self, article_id: &str, text: &str) -> Result<Sentence, DatabaseError> {
        let tx = self.db().begin_immediate().await?;
        let result = self.insert_sentence(article_id, text).await;
        Self::finish(tx, result).await
    }

    async fn insert_sentence(&self, article_id: &str, text: &str) -> Result<Sentence, DatabaseError> {
        self.get_article(article_id).await?;
        if text.trim().is_empty() {
            return Err(DatabaseError::validation("sentence text must not be empty"));
        }

        let mut rows = self
            .db()
            .query(
                "SELECT COALESCE(MAX(position) + 1, 0) FROM sentences WHERE article_id = ?1",
                [article_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let position = get_position(&row, 0)?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_SENTENCE).await?;
        self.db()
            .execute(
                "INSERT INTO sentences (id, article_id, position, text, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![id.as_str(), article_id, i64::from(position), text, fmt_datetime(&now)],
            )
            .await?;

        Ok(Sentence {
            id,
            article_id: article_id.to_string(),
            position,
            text: text.to_string(),
            created_at: now,
        })
    }

    /// Get a sentence by ID.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the sentence does not exist.
    pub async fn get_sentence(&self, id: &str) -> Result<Sentence, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {SENTENCE_COLS} FROM sentences WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::Sentence, id))?;
        row_to_sentence(&row)
    }

    /// List the sentences of an article by position.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_sentences(&self, article_id: &str) -> Result<Vec<Sentence>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {SENTENCE_COLS} FROM sentences WHERE article_id = ?1 ORDER BY position"
                ),
                [article_id],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_sentence(&row)?);
        }
        Ok(items)
    }

    /// Check that every id names an existing sentence of `article_id`.
    ///
    /// Duplicates are allowed. Unknown ids and sentences of other articles are
    /// both reported as validation errors, listing the offenders in input order.
    pub(crate) async fn ensure_sentences_in_article(
        &self,
        article_id: &str,
        sentence_ids: &[String],
    ) -> Result<(), DatabaseError> {
        if sentence_ids.is_empty() {
            return Ok(());
        }
        let known: HashSet<String> = self
            .list_sentences(article_id)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let mut offenders: Vec<&str> = Vec::new();
        for id in sentence_ids {
            if !known.contains(id) && !offenders.contains(&id.as_str()) {
                offenders.push(id);
            }
        }
        if offenders.is_empty() {
            Ok(())
        } else {
            Err(DatabaseError::validation(format!(
                "sentences not in article {article_id}: {}",
                offenders.join(", ")
            )))
        }
    }
}
