use clap::Subcommand;

/// Response commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ResponseCommands {
    /// Add a highlighted sentence to a milestone.
    Create {
        #[arg(long)]
        milestone: String,
        #[arg(long)]
        sentence: String,
    },
    /// List the responses of a milestone.
    List {
        #[arg(long)]
        milestone: String,
    },
    /// Delete a response.
    Delete { id: String },
}
