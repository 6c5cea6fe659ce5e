use cq_db::updates::research::ResearchUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResearchCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cq research`.
pub async fn handle(
    action: &ResearchCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ResearchCommands::Create { title, author } => {
            let research = ctx
                .service
                .create_research(title, author.as_deref())
                .await?;
            output(&research, flags.format)
        }
        ResearchCommands::Update {
            id,
            title,
            author,
            clear_author,
        } => {
            if title.is_none() && author.is_none() && !clear_author {
                anyhow::bail!("At least one of --title, --author, or --clear-author must be provided");
            }
            let mut builder = ResearchUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(author) = author {
                builder = builder.author(Some(author.clone()));
            } else if *clear_author {
                builder = builder.author(None);
            }
            let updated = ctx.service.update_research(id, builder.build()).await?;
            output(&updated, flags.format)
        }
        ResearchCommands::List => {
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            let items = ctx.service.list_research(limit).await?;
            output(&items, flags.format)
        }
        ResearchCommands::Get { id } => {
            let research = ctx.service.get_research(id).await?;
            output(&research, flags.format)
        }
        ResearchCommands::Delete { id } => {
            ctx.service.delete_research(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
