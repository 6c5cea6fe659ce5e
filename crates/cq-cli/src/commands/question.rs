use cq_db::repos::question::QuestionFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuestionCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cq question`.
pub async fn handle(
    action: &QuestionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuestionCommands::Create {
            research,
            content,
            phase,
        } => {
            let actor = ctx.require_actor().await?;
            let question = ctx
                .service
                .create_question(&actor, research, content, phase.as_deref())
                .await?;
            output(&question, flags.format)
        }
        QuestionCommands::Get { id } => {
            let question = ctx.service.get_question(id).await?;
            output(&question, flags.format)
        }
        QuestionCommands::List { research, phase } => {
            let filter = QuestionFilter {
                research_id: research.clone(),
                created_phase: phase.clone(),
                limit: Some(effective_limit(flags.limit, ctx.config.general.default_limit)),
            };
            let questions = ctx.service.list_questions(&filter).await?;
            output(&questions, flags.format)
        }
    }
}
