use clap::Subcommand;

/// Article commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ArticleCommands {
    /// Create an article in a research.
    Create {
        #[arg(long)]
        research: String,
        #[arg(long)]
        title: String,
    },
    /// Get an article by ID.
    Get { id: String },
    /// List the articles of a research with their assigned-profile counts.
    List {
        #[arg(long)]
        research: String,
    },
    /// Show the article the next registration would be assigned to.
    Next {
        #[arg(long)]
        research: String,
    },
}
