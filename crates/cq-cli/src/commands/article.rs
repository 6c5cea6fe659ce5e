use crate::cli::GlobalFlags;
use crate::cli::subcommands::ArticleCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cq article`.
pub async fn handle(
    action: &ArticleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ArticleCommands::Create { research, title } => {
            let article = ctx.service.create_article(research, title).await?;
            output(&article, flags.format)
        }
        ArticleCommands::Get { id } => {
            let article = ctx.service.get_article(id).await?;
            output(&article, flags.format)
        }
        ArticleCommands::List { research } => {
            ctx.service.get_research(research).await?;
            let loads = ctx.service.article_loads(research).await?;
            output(&loads, flags.format)
        }
        ArticleCommands::Next { research } => {
            let article = ctx.service.balance_assign(research).await?;
            output(&article, flags.format)
        }
    }
}
