use serde::Serialize;

use cq_core::entities::{Profile, User};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// A user together with their profile.
#[derive(Debug, Serialize)]
struct UserWithProfile {
    user: User,
    profile: Profile,
}

/// Handle `cq user`.
pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::Register {
            username,
            email,
            research,
        } => {
            let registration = ctx
                .service
                .register_participant(username, email.as_deref(), research.as_deref())
                .await?;
            output(&registration, flags.format)
        }
        UserCommands::Create {
            username,
            email,
            superuser,
        } => {
            let (user, profile) = ctx
                .service
                .create_user(username, email.as_deref(), *superuser)
                .await?;
            output(&UserWithProfile { user, profile }, flags.format)
        }
        UserCommands::Get { username } => {
            let user = ctx.service.get_user_by_username(username).await?;
            let profile = ctx.service.get_profile_for_user(&user.id).await?;
            output(&UserWithProfile { user, profile }, flags.format)
        }
        UserCommands::List => {
            let actor = ctx.require_actor().await?;
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            let users = ctx.service.list_users(&actor, limit).await?;
            output(&users, flags.format)
        }
    }
}
