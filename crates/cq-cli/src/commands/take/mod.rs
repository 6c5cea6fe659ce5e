mod create;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TakeCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cq take`.
pub async fn handle(action: &TakeCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TakeCommands::Create { article, question } => {
            create::run(article, question, ctx, flags).await
        }
        TakeCommands::Get { id } => {
            let detail = ctx.service.get_take_detail(id).await?;
            output(&detail, flags.format)
        }
        TakeCommands::List {
            owner,
            article,
            question,
            all,
        } => {
            list::run(
                owner.as_deref(),
                article.as_deref(),
                question.as_deref(),
                *all,
                ctx,
                flags,
            )
            .await
        }
        TakeCommands::Remove { id } => {
            let take = ctx.service.remove_take(id).await?;
            output(&take, flags.format)
        }
        TakeCommands::Suggestions { id } => {
            let suggestions = ctx.service.suggestions(id).await?;
            output(&suggestions, flags.format)
        }
    }
}
