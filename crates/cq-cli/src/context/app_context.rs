use std::path::Path;

use anyhow::Context;
use cq_config::CqConfig;
use cq_core::identity::Actor;
use cq_db::service::CqService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: CqService,
    pub config: CqConfig,
    /// Username from `--user`, resolved lazily by [`AppContext::require_actor`].
    pub username: Option<String>,
}

impl AppContext {
    /// Open the configured database, creating its parent directory if needed.
    pub async fn init(config: CqConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if !config.database.is_in_memory()
            && let Some(parent) = Path::new(&config.database.path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let service = CqService::new_local_with_busy_timeout(
            &config.database.path,
            config.policy.tie_break,
            config.database.busy_timeout(),
        )
        .await
        .with_context(|| format!("failed to open database at {}", config.database.path))?;
        tracing::debug!(
            path = %config.database.path,
            busy_timeout_ms = config.database.busy_timeout_ms,
            tie_break = %config.policy.tie_break,
            "cq context ready"
        );

        Ok(Self {
            service,
            config,
            username: flags.user.clone(),
        })
    }

    /// Resolve the acting user from `--user`.
    pub async fn require_actor(&self) -> anyhow::Result<Actor> {
        let username = self
            .username
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("this command needs an acting user; pass --user <username>"))?;
        Ok(self.service.actor_for(username).await?)
    }
}
