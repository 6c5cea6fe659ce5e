//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use cq_config::CqConfig;
use cq_core::enums::TieBreak;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/cq/survey.db"

[policy]
tie_break = "latest"

[general]
default_limit = 50
"#,
        )?;

        let config: CqConfig = Figment::from(Serialized::defaults(CqConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/cq/survey.db");
        assert_eq!(config.policy.tie_break, TieBreak::Latest);
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\ndefault_limit = 5\n")?;

        let config: CqConfig = Figment::from(Serialized::defaults(CqConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 5);
        assert_eq!(config.database.path, ".cq/cq.db");
        assert_eq!(config.policy.tie_break, TieBreak::Earliest);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".cq")?;
        jail.create_file(".cq/config.toml", "[database]\npath = \"project.db\"\n")?;

        let config = CqConfig::load().expect("config loads");
        assert_eq!(config.database.path, "project.db");
        Ok(())
    });
}

#[test]
fn unknown_tie_break_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[policy]\ntie_break = \"random\"\n")?;

        let result: Result<CqConfig, _> =
            Figment::from(Serialized::defaults(CqConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
