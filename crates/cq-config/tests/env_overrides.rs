use cq_config::{ConfigError, CqConfig};
use cq_core::enums::TieBreak;
use figment::Jail;

#[test]
fn env_overrides_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".cq")?;
        jail.create_file(".cq/config.toml", "[database]\npath = \"from-toml.db\"\n")?;
        jail.set_env("CQ_DATABASE__PATH", "from-env.db");

        let config = CqConfig::load().expect("config loads");
        assert_eq!(config.database.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn env_sets_tie_break() {
    Jail::expect_with(|jail| {
        jail.set_env("CQ_POLICY__TIE_BREAK", "latest");

        let config = CqConfig::load().expect("config loads");
        assert_eq!(config.policy.tie_break, TieBreak::Latest);
        Ok(())
    });
}

#[test]
fn invalid_env_limit_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("CQ_GENERAL__DEFAULT_LIMIT", "0");

        let result = CqConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn env_sets_busy_timeout() {
    Jail::expect_with(|jail| {
        jail.set_env("CQ_DATABASE__BUSY_TIMEOUT_MS", "250");

        let config = CqConfig::load().expect("config loads");
        assert_eq!(config.database.busy_timeout_ms, 250);
        assert_eq!(
            config.database.busy_timeout(),
            std::time::Duration::from_millis(250)
        );
        Ok(())
    });
}
