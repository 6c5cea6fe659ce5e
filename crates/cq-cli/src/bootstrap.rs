use anyhow::Context;
use cq_config::CqConfig;
use cq_core::enums::TieBreak;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CqConfig> {
    let mut config = CqConfig::load_with_dotenv().context("failed to load cq configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut CqConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
    if let Some(raw) = &flags.tie_break {
        config.policy.tie_break = parse_enum::<TieBreak>(raw, "tie-break")?;
    }
    config.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use cq_config::CqConfig;
    use cq_core::enums::TieBreak;

    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            db: None,
            user: None,
            tie_break: None,
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config = CqConfig::default();
        let flags = GlobalFlags {
            db: Some(":memory:".into()),
            tie_break: Some("latest".into()),
            ..flags()
        };
        apply_overrides(&mut config, &flags).expect("overrides should apply");
        assert!(config.database.is_in_memory());
        assert_eq!(config.policy.tie_break, TieBreak::Latest);
    }

    #[test]
    fn blank_db_override_rejected() {
        let mut config = CqConfig::default();
        let flags = GlobalFlags {
            db: Some("  ".into()),
            ..flags()
        };
        assert!(apply_overrides(&mut config, &flags).is_err());
    }

    #[test]
    fn unknown_tie_break_rejected() {
        let mut config = CqConfig::default();
        let flags = GlobalFlags {
            tie_break: Some("random".into()),
            ..flags()
        };
        let err = apply_overrides(&mut config, &flags).expect_err("should fail");
        assert!(err.to_string().contains("invalid tie-break 'random'"));
    }
}
