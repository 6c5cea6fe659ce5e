//! Question repository: researcher-owned prompts, filterable by creation phase.

use chrono::Utc;

use cq_core::entities::Question;
use cq_core::enums::EntityType;
use cq_core::errors::CoreError;
use cq_core::identity::Actor;
use cq_core::ids::PREFIX_QUESTION;

use crate::error::DatabaseError;
use crate::helpers::{fmt_datetime, get_datetime, get_opt_string};
use crate::service::CqService;

const QUESTION_COLS: &str = "id, research_id, owner_id, content, created_phase, created_at";

fn row_to_question(row: &libsql::Row) -> Result<Question, DatabaseError> {
    Ok(Question {
        id: row.get(0)?,
        research_id: row.get(1)?,
        owner_id: row.get(2)?,
        content: row.get(3)?,
        created_phase: get_opt_string(row, 4)?,
        created_at: get_datetime(row, 5)?,
    })
}

/// Filter criteria for question listings.
#[derive(Debug, Default)]
pub struct QuestionFilter {
    pub research_id: Option<String>,
    pub created_phase: Option<String>,
    pub limit: Option<u32>,
}

impl CqService {
    /// Create a question owned by `actor`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the research or actor does not exist, or a
    /// validation error for blank content.
    pub async fn create_question(
        &self,
        actor: &Actor,
        research_id: &str,
        content: &str,
        created_phase: Option<&str>,
    ) -> Result<Question, DatabaseError> {
        self.get_research(research_id).await?;
        self.get_user(&actor.user_id).await?;
        if content.trim().is_empty() {
            return Err(DatabaseError::validation("question content must not be empty"));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_QUESTION).await?;
        self.db()
            .execute(
                "INSERT INTO questions (id, research_id, owner_id, content, created_phase, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    research_id,
                    actor.user_id.as_str(),
                    content,
                    created_phase,
                    fmt_datetime(&now)
                ],
            )
            .await?;

        Ok(Question {
            id,
            research_id: research_id.to_string(),
            owner_id: actor.user_id.clone(),
            content: content.to_string(),
            created_phase: created_phase.map(String::from),
            created_at: now,
        })
    }

    /// Get a question by ID.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the question does not exist.
    pub async fn get_question(&self, id: &str) -> Result<Question, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {QUESTION_COLS} FROM questions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::Question, id))?;
        row_to_question(&row)
    }

    /// List questions in creation order with optional filters.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_questions(
        &self,
        filter: &QuestionFilter,
    ) -> Result<Vec<Question>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref research_id) = filter.research_id {
            params.push(libsql::Value::Text(research_id.clone()));
            conditions.push(format!("research_id = ?{}", params.len()));
        }
        if let Some(ref phase) = filter.created_phase {
            params.push(libsql::Value::Text(phase.clone()));
            conditions.push(format!("created_phase = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let limit = filter
            .limit
            .map(|l| format!(" LIMIT {l}"))
            .unwrap_or_default();
        let sql =
            format!("SELECT {QUESTION_COLS} FROM questions {where_clause} ORDER BY rowid{limit}");

        let mut rows = self
            .db()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_question(&row)?);
        }
        Ok(items)
    }
}
