//! User repository: creation (with profile), lookup, and actor-scoped listing.

use chrono::Utc;

use cq_core::entities::{Profile, User};
use cq_core::enums::EntityType;
use cq_core::errors::CoreError;
use cq_core::identity::Actor;
use cq_core::ids::PREFIX_USER;

use crate::error::DatabaseError;
use crate::helpers::{fmt_datetime, get_bool, get_datetime, get_opt_string};
use crate::service::CqService;

const USER_COLS: &str = "id, username, email, is_superuser, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: get_opt_string(row, 2)?,
        is_superuser: get_bool(row, 3)?,
        created_at: get_datetime(row, 4)?,
    })
}

impl CqService {
    /// Create a user together with its (unassigned) profile.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank or already-taken username.
    pub async fn create_user(
        &self,
        username: &str,
        email: Option<&str>,
        is_superuser: bool,
    ) -> Result<(User, Profile), DatabaseError> {
        let tx = self.db().begin_immediate().await?;
        let result = self.insert_user(username, email, is_superuser).await;
        Self::finish(tx, result).await
    }

    /// Insert a user and its profile. Caller owns the transaction.
    pub(crate) async fn insert_user(
        &self,
        username: &str,
        email: Option<&str>,
        is_superuser: bool,
    ) -> Result<(User, Profile), DatabaseError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DatabaseError::validation("username must not be empty"));
        }
        if self.find_user_by_username(username).await?.is_some() {
            return Err(DatabaseError::validation(format!(
                "username '{username}' is already taken"
            )));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_USER).await?;
        self.db()
            .execute(
                "INSERT INTO users (id, username, email, is_superuser, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    username,
                    email,
                    i64::from(is_superuser),
                    fmt_datetime(&now)
                ],
            )
            .await?;

        let user = User {
            id,
            username: username.to_string(),
            email: email.map(String::from),
            is_superuser,
            created_at: now,
        };
        let profile = self.insert_profile(&user.id).await?;
        tracing::debug!(user_id = %user.id, username = %user.username, "created user");
        Ok((user, profile))
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the user does not exist.
    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .query(&format!("SELECT {USER_COLS} FROM users WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::User, id))?;
        row_to_user(&row)
    }

    /// Get a user by username.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no user has that username.
    pub async fn get_user_by_username(&self, username: &str) -> Result<User, DatabaseError> {
        self.find_user_by_username(username)
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::User, username).into())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {USER_COLS} FROM users WHERE username = ?1"),
                [username],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Resolve the acting user for `username`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no user has that username.
    pub async fn actor_for(&self, username: &str) -> Result<Actor, DatabaseError> {
        let user = self.get_user_by_username(username).await?;
        Ok(Actor {
            user_id: user.id,
            is_superuser: user.is_superuser,
        })
    }

    /// List the users visible to `actor`: everyone for superusers, otherwise
    /// only the actor's own record.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_users(&self, actor: &Actor, limit: u32) -> Result<Vec<User>, DatabaseError> {
        let mut rows = if actor.is_superuser {
            self.db()
                .query(
                    &format!("SELECT {USER_COLS} FROM users ORDER BY rowid LIMIT {limit}"),
                    (),
                )
                .await?
        } else {
            self.db()
                .query(
                    &format!("SELECT {USER_COLS} FROM users WHERE id = ?1"),
                    [actor.user_id.as_str()],
                )
                .await?
        };

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_service;

    #[tokio::test]
    async fn create_user_also_creates_profile() {
        let svc = test_service().await;
        let (user, profile) = svc
            .create_user("alice", Some("alice@example.org"), false)
            .await
            .unwrap();

        assert!(user.id.starts_with("usr-"));
        assert_eq!(user.email.as_deref(), Some("alice@example.org"));
        assert_eq!(profile.user_id, user.id);
        assert_eq!(profile.article_id, None);

        let fetched = svc.get_user(&user.id).await.unwrap();
        assert_eq!(fetched, user);
    }

    #[tokio::test]
    async fn duplicate_username_rejected() {
        let svc = test_service().await;
        svc.create_user("alice", None, false).await.unwrap();
        let err = svc.create_user("alice", None, false).await.unwrap_err();
        assert!(err.is_validation(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn blank_username_rejected() {
        let svc = test_service().await;
        let err = svc.create_user("   ", None, false).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let svc = test_service().await;
        assert!(svc.get_user("usr-00000000").await.unwrap_err().is_not_found());
        assert!(
            svc.get_user_by_username("nobody")
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn superuser_lists_everyone_others_only_themselves() {
        let svc = test_service().await;
        svc.create_user("admin", None, true).await.unwrap();
        svc.create_user("bob", None, false).await.unwrap();
        svc.create_user("carol", None, false).await.unwrap();

        let admin = svc.actor_for("admin").await.unwrap();
        assert!(admin.is_superuser);
        assert_eq!(svc.list_users(&admin, 10).await.unwrap().len(), 3);

        let bob = svc.actor_for("bob").await.unwrap();
        let visible = svc.list_users(&bob, 10).await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].username, "bob");
    }
}
