use crate::cli::GlobalFlags;
use crate::cli::subcommands::SentenceCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cq sentence`.
pub async fn handle(
    action: &SentenceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SentenceCommands::Add { article, text } => {
            let sentence = ctx.service.add_sentence(article, text).await?;
            output(&sentence, flags.format)
        }
        SentenceCommands::Get { id } => {
            let sentence = ctx.service.get_sentence(id).await?;
            output(&sentence, flags.format)
        }
        SentenceCommands::List { article } => {
            ctx.service.get_article(article).await?;
            let sentences = ctx.service.list_sentences(article).await?;
            output(&sentences, flags.format)
        }
    }
}
