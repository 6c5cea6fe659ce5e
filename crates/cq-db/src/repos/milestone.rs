//! Milestone repository: snapshots of a take's highlighted sentences.

use chrono::{DateTime, Utc};

use cq_core::entities::Milestone;
use cq_core::enums::EntityType;
use cq_core::errors::CoreError;
use cq_core::ids::PREFIX_MILESTONE;
use cq_core::responses::MilestoneDetail;

use crate::error::DatabaseError;
use crate::helpers::{fmt_datetime, fmt_opt_datetime, get_datetime, get_opt_datetime, get_opt_string};
use crate::service::CqService;
use crate::updates::milestone::MilestoneUpdate;

const MILESTONE_COLS: &str = "id, take_id, user_id, found, copied_from, response_at, created_at";

/// Column list qualified with the `m` alias, for joins.
pub(crate) const MILESTONE_COLS_M: &str =
    "m.id, m.take_id, m.user_id, m.found, m.copied_from, m.response_at, m.created_at";

pub(crate) fn row_to_milestone(row: &libsql::Row) -> Result<Milestone, DatabaseError> {
    Ok(Milestone {
        id: row.get(0)?,
        take_id: row.get(1)?,
        user_id: row.get(2)?,
        found: get_opt_datetime(row, 3)?,
        copied_from: get_opt_string(row, 4)?,
        response_at: get_datetime(row, 5)?,
        created_at: get_datetime(row, 6)?,
    })
}

impl CqService {
    /// Move a milestone's `response_at` to the time of its latest response.
    pub(crate) async fn advance_response_at(
        &self,
        milestone_id: &str,
        at: &DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        self.db()
            .execute(
                "UPDATE milestones SET response_at = ?1 WHERE id = ?2",
                libsql::params![fmt_datetime(at), milestone_id],
            )
            .await?;
        Ok(())
    }

    /// Insert a milestone on `take_id`. `response_at` starts at creation time.
    /// Caller owns the transaction and validation.
    pub(crate) async fn insert_milestone(
        &self,
        take_id: &str,
        user_id: &str,
        found: Option<DateTime<Utc>>,
        copied_from: Option<&str>,
    ) -> Result<Milestone, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_MILESTONE).await?;
        self.db()
            .execute(
                "INSERT INTO milestones (id, take_id, user_id, found, copied_from, response_at, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
                libsql::params![
                    id.as_str(),
                    take_id,
                    user_id,
                    fmt_opt_datetime(found.as_ref()),
                    copied_from,
                    fmt_datetime(&now)
                ],
            )
            .await?;

        Ok(Milestone {
            id,
            take_id: take_id.to_string(),
            user_id: user_id.to_string(),
            found,
            copied_from: copied_from.map(String::from),
            response_at: now,
            created_at: now,
        })
    }

    /// Get a milestone by ID.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the milestone does not exist.
    pub async fn get_milestone(&self, id: &str) -> Result<Milestone, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {MILESTONE_COLS} FROM milestones WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::Milestone, id))?;
        row_to_milestone(&row)
    }

    /// Get a milestone with its responses attached.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the milestone does not exist.
    pub async fn get_milestone_detail(&self, id: &str) -> Result<MilestoneDetail, DatabaseError> {
        let milestone = self.get_milestone(id).await?;
        self.attach_responses(milestone).await
    }

    pub(crate) async fn attach_responses(
        &self,
        milestone: Milestone,
    ) -> Result<MilestoneDetail, DatabaseError> {
        let responses = self.list_responses(&milestone.id).await?;
        Ok(MilestoneDetail {
            milestone,
            responses,
        })
    }

    /// List the milestones of a take in creation order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_milestones(&self, take_id: &str) -> Result<Vec<Milestone>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {MILESTONE_COLS} FROM milestones WHERE take_id = ?1 ORDER BY rowid"
                ),
                [take_id],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_milestone(&row)?);
        }
        Ok(items)
    }

    /// The most recently created milestone of a take.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the take does not exist, or an
    /// empty-collection error if it has no milestones.
    pub async fn current_milestone(&self, take_id: &str) -> Result<Milestone, DatabaseError> {
        self.get_take(take_id).await?;
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {MILESTONE_COLS} FROM milestones WHERE take_id = ?1
                     ORDER BY rowid DESC LIMIT 1"
                ),
                [take_id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| CoreError::EmptyCollection {
            collection: "milestones".to_string(),
            owner: format!("take {take_id}"),
        })?;
        row_to_milestone(&row)
    }

    /// Update a milestone's `found` marker and/or `response_at`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the milestone does not exist.
    pub async fn update_milestone(
        &self,
        milestone_id: &str,
        update: MilestoneUpdate,
    ) -> Result<Milestone, DatabaseError> {
        if update.is_empty() {
            return self.get_milestone(milestone_id).await;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref found) = update.found {
            match found {
                Some(ts) => params.push(libsql::Value::Text(fmt_datetime(ts))),
                None => params.push(libsql::Value::Null),
            }
            sets.push(format!("found = ?{idx}"));
            idx += 1;
        }
        if let Some(ref response_at) = update.response_at {
            params.push(libsql::Value::Text(fmt_datetime(response_at)));
            sets.push(format!("response_at = ?{idx}"));
            idx += 1;
        }

        params.push(libsql::Value::Text(milestone_id.to_string()));
        let sql = format!(
            "UPDATE milestones SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );

        let changed = self
            .db()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(CoreError::not_found(EntityType::Milestone, milestone_id).into());
        }
        self.get_milestone(milestone_id).await
    }
}
