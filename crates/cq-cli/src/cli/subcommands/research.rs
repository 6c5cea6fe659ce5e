use clap::Subcommand;

/// Research commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ResearchCommands {
    /// Create a research.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: Option<String>,
    },
    /// Update a research.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, conflicts_with = "clear_author")]
        author: Option<String>,
        /// Remove the author.
        #[arg(long)]
        clear_author: bool,
    },
    /// List researches.
    List,
    /// Get a research by ID.
    Get { id: String },
    /// Delete a research and everything under it.
    Delete { id: String },
}
