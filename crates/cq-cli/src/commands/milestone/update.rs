use cq_db::updates::milestone::{MilestoneUpdate, MilestoneUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_timestamp;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    found: Option<&str>,
    clear_found: bool,
    response_at: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(found, clear_found, response_at)?;
    let updated = ctx.service.update_milestone(id, update).await?;
    output(&updated, flags.format)
}

fn build_update(
    found: Option<&str>,
    clear_found: bool,
    response_at: Option<&str>,
) -> anyhow::Result<MilestoneUpdate> {
    if found.is_none() && !clear_found && response_at.is_none() {
        anyhow::bail!("At least one of --found, --clear-found, or --response-at must be provided");
    }

    let mut builder = MilestoneUpdateBuilder::new();
    if let Some(raw) = found {
        builder = builder.found(Some(parse_timestamp(raw, "found")?));
    } else if clear_found {
        builder = builder.found(None);
    }
    if let Some(raw) = response_at {
        builder = builder.response_at(parse_timestamp(raw, "response-at")?);
    }
    Ok(builder.build())
}
