mod renew;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MilestoneCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cq milestone`.
pub async fn handle(
    action: &MilestoneCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MilestoneCommands::Renew {
            take_id,
            sentences,
            found,
        } => renew::run(take_id, sentences, *found, ctx, flags).await,
        MilestoneCommands::Get { id } => {
            let detail = ctx.service.get_milestone_detail(id).await?;
            output(&detail, flags.format)
        }
        MilestoneCommands::List { take, current } => {
            if *current {
                let milestone = ctx.service.current_milestone(take).await?;
                output(&milestone, flags.format)
            } else {
                ctx.service.get_take(take).await?;
                let milestones = ctx.service.list_milestones(take).await?;
                output(&milestones, flags.format)
            }
        }
        MilestoneCommands::Update {
            id,
            found,
            clear_found,
            response_at,
        } => {
            update::run(
                id,
                found.as_deref(),
                *clear_found,
                response_at.as_deref(),
                ctx,
                flags,
            )
            .await
        }
    }
}
