use clap::Subcommand;

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Register a participant and assign them to the least-used article.
    Register {
        username: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        research: Option<String>,
    },
    /// Create a user without assignment (researchers, administrators).
    Create {
        username: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        superuser: bool,
    },
    /// Get a user and profile by username.
    Get { username: String },
    /// List users visible to the acting user.
    List,
}
