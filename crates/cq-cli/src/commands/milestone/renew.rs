use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    take_id: &str,
    sentence_ids: &[String],
    found: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = ctx.require_actor().await?;
    let found = found.then(Utc::now);
    let detail = ctx
        .service
        .renew_milestone(&actor, take_id, sentence_ids, found)
        .await?;
    output(&detail, flags.format)
}
