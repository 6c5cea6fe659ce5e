use clap::Subcommand;

/// Take commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TakeCommands {
    /// Start a take for the acting user, seeded from sibling work when available.
    Create {
        #[arg(long)]
        article: String,
        #[arg(long)]
        question: String,
    },
    /// Get a take with its milestones and responses.
    Get { id: String },
    /// List takes.
    List {
        /// Only takes by this username.
        #[arg(long)]
        owner: Option<String>,
        #[arg(long)]
        article: Option<String>,
        #[arg(long)]
        question: Option<String>,
        /// Include removed takes.
        #[arg(long)]
        all: bool,
    },
    /// Soft-remove a take.
    Remove { id: String },
    /// Show responses from the latest complete sibling milestone.
    Suggestions { id: String },
}
