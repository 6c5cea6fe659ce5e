use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResponseCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cq response`.
pub async fn handle(
    action: &ResponseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ResponseCommands::Create {
            milestone,
            sentence,
        } => {
            let actor = ctx.require_actor().await?;
            let response = ctx
                .service
                .create_response(&actor, milestone, sentence)
                .await?;
            output(&response, flags.format)
        }
        ResponseCommands::List { milestone } => {
            ctx.service.get_milestone(milestone).await?;
            let responses = ctx.service.list_responses(milestone).await?;
            output(&responses, flags.format)
        }
        ResponseCommands::Delete { id } => {
            ctx.service.delete_response(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
