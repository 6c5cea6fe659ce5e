//! Research repository: CRUD.

use chrono::Utc;

use cq_core::entities::Research;
use cq_core::enums::EntityType;
use cq_core::errors::CoreError;
use cq_core::ids::PREFIX_RESEARCH;

use crate::error::DatabaseError;
use crate::helpers::{fmt_datetime, get_datetime, get_opt_string};
use crate::service::CqService;
use crate::updates::research::ResearchUpdate;

const RESEARCH_COLS: &str = "id, title, author, created_at, updated_at";

fn row_to_research(row: &libsql::Row) -> Result<Research, DatabaseError> {
    Ok(Research {
        id: row.get(0)?,
        title: row.get(1)?,
        author: get_opt_string(row, 2)?,
        created_at: get_datetime(row, 3)?,
        updated_at: get_datetime(row, 4)?,
    })
}

impl CqService {
    /// Create a new research.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank title, or `DatabaseError` if the INSERT fails.
    pub async fn create_research(
        &self,
        title: &str,
        author: Option<&str>,
    ) -> Result<Research, DatabaseError> {
        if title.trim().is_empty() {
            return Err(DatabaseError::validation("research title must not be empty"));
        }
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_RESEARCH).await?;

        self.db()
            .execute(
                "INSERT INTO researches (id, title, author, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)",
                libsql::params![id.as_str(), title, author, fmt_datetime(&now)],
            )
            .await?;

        Ok(Research {
            id,
            title: title.to_string(),
            author: author.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a research by ID.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the research does not exist.
    pub async fn get_research(&self, id: &str) -> Result<Research, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {RESEARCH_COLS} FROM researches WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::Research, id))?;
        row_to_research(&row)
    }

    /// Update a research with dynamic SET clauses.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the research does not exist.
    pub async fn update_research(
        &self,
        research_id: &str,
        update: ResearchUpdate,
    ) -> Result<Research, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref title) = update.title {
            if title.trim().is_empty() {
                return Err(DatabaseError::validation("research title must not be empty"));
            }
            params.push(libsql::Value::Text(title.clone()));
            sets.push(format!("title = ?{idx}"));
            idx += 1;
        }
        if let Some(ref author) = update.author {
            match author {
                Some(a) => params.push(libsql::Value::Text(a.clone())),
                None => params.push(libsql::Value::Null),
            }
            sets.push(format!("author = ?{idx}"));
            idx += 1;
        }

        params.push(libsql::Value::Text(fmt_datetime(&Utc::now())));
        sets.push(format!("updated_at = ?{idx}"));
        idx += 1;

        params.push(libsql::Value::Text(research_id.to_string()));
        let sql = format!(
            "UPDATE researches SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );

        let changed = self
            .db()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(CoreError::not_found(EntityType::Research, research_id).into());
        }
        self.get_research(research_id).await
    }

    /// Delete a research. Its articles, sentences, questions and takes cascade.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the research does not exist.
    pub async fn delete_research(&self, research_id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .execute("DELETE FROM researches WHERE id = ?1", [research_id])
            .await?;
        if changed == 0 {
            return Err(CoreError::not_found(EntityType::Research, research_id).into());
        }
        tracing::info!(research_id, "deleted research");
        Ok(())
    }

    /// List researches in creation order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_research(&self, limit: u32) -> Result<Vec<Research>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {RESEARCH_COLS} FROM researches ORDER BY rowid LIMIT {limit}"),
                (),
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_research(&row)?);
        }
        Ok(items)
    }
}
