//! Take repository: participant sessions over (article, question) pairs.

use chrono::Utc;

use cq_core::entities::Take;
use cq_core::enums::EntityType;
use cq_core::errors::CoreError;
use cq_core::ids::PREFIX_TAKE;
use cq_core::responses::TakeDetail;

use crate::error::DatabaseError;
use crate::helpers::{fmt_datetime, get_datetime, get_opt_datetime};
use crate::service::CqService;

const TAKE_COLS: &str =
    "id, user_id, article_id, question_id, created_at, updated_at, removed_at";

pub(crate) fn row_to_take(row: &libsql::Row) -> Result<Take, DatabaseError> {
    Ok(Take {
        id: row.get(0)?,
        user_id: row.get(1)?,
        article_id: row.get(2)?,
        question_id: row.get(3)?,
        created_at: get_datetime(row, 4)?,
        updated_at: get_datetime(row, 5)?,
        removed_at: get_opt_datetime(row, 6)?,
    })
}

/// Filter criteria for take listings. Removed takes are hidden unless
/// `include_removed` is set.
#[derive(Debug, Default)]
pub struct TakeFilter {
    pub user_id: Option<String>,
    pub article_id: Option<String>,
    pub question_id: Option<String>,
    pub include_removed: bool,
    pub limit: Option<u32>,
}

impl CqService {
    /// Insert a bare take. Caller owns the transaction and validation.
    pub(crate) async fn insert_take(
        &self,
        user_id: &str,
        article_id: &str,
        question_id: &str,
    ) -> Result<Take, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TAKE).await?;
        self.db()
            .execute(
                "INSERT INTO takes (id, user_id, article_id, question_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
                libsql::params![id.as_str(), user_id, article_id, question_id, fmt_datetime(&now)],
            )
            .await?;

        Ok(Take {
            id,
            user_id: user_id.to_string(),
            article_id: article_id.to_string(),
            question_id: question_id.to_string(),
            created_at: now,
            updated_at: now,
            removed_at: None,
        })
    }

    /// Bump `updated_at` on a take after its milestones changed.
    pub(crate) async fn touch_take(&self, take_id: &str) -> Result<(), DatabaseError> {
        self.db()
            .execute(
                "UPDATE takes SET updated_at = ?1 WHERE id = ?2",
                libsql::params![fmt_datetime(&Utc::now()), take_id],
            )
            .await?;
        Ok(())
    }

    /// Get a take by ID. Removed takes are still returned.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the take does not exist.
    pub async fn get_take(&self, id: &str) -> Result<Take, DatabaseError> {
        let mut rows = self
            .db()
            .query(&format!("SELECT {TAKE_COLS} FROM takes WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::Take, id))?;
        row_to_take(&row)
    }

    /// Get a take with all of its milestones and their responses.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the take does not exist.
    pub async fn get_take_detail(&self, id: &str) -> Result<TakeDetail, DatabaseError> {
        let take = self.get_take(id).await?;
        let mut milestones = Vec::new();
        for milestone in self.list_milestones(&take.id).await? {
            milestones.push(self.attach_responses(milestone).await?);
        }
        Ok(TakeDetail { take, milestones })
    }

    /// List takes in creation order with optional filters.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_takes(&self, filter: &TakeFilter) -> Result<Vec<Take>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        for (column, value) in [
            ("user_id", &filter.user_id),
            ("article_id", &filter.article_id),
            ("question_id", &filter.question_id),
        ] {
            if let Some(value) = value {
                params.push(libsql::Value::Text(value.clone()));
                conditions.push(format!("{column} = ?{}", params.len()));
            }
        }
        if !filter.include_removed {
            conditions.push("removed_at IS NULL".to_string());
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
        let sql = format!("SELECT {TAKE_COLS} FROM takes {where_clause} ORDER BY rowid{limit}");

        let mut rows = self
            .db()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_take(&row)?);
        }
        Ok(items)
    }

    /// Soft-remove a take. Removing an already removed take keeps the original
    /// `removed_at`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the take does not exist.
    pub async fn remove_take(&self, id: &str) -> Result<Take, DatabaseError> {
        let now = fmt_datetime(&Utc::now());
        let changed = self
            .db()
            .execute(
                "UPDATE takes SET removed_at = COALESCE(removed_at, ?1), updated_at = ?1
                 WHERE id = ?2",
                libsql::params![now, id],
            )
            .await?;
        if changed == 0 {
            return Err(CoreError::not_found(EntityType::Take, id).into());
        }
        tracing::info!(take_id = id, "removed take");
        self.get_take(id).await
    }
}
