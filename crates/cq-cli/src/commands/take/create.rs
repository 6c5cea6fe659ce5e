use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    article_id: &str,
    question_id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = ctx.require_actor().await?;
    let detail = ctx
        .service
        .create_take_with_seed(&actor, article_id, question_id)
        .await?;

    if let Some(seed) = detail.milestones.first()
        && let Some(source) = &seed.milestone.copied_from
    {
        tracing::info!(
            source = %source,
            responses = seed.responses.len(),
            "take seeded from sibling milestone"
        );
    }
    output(&detail, flags.format)
}
