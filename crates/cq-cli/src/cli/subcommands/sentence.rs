use clap::Subcommand;

/// Sentence commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SentenceCommands {
    /// Append a sentence to an article.
    Add {
        #[arg(long)]
        article: String,
        #[arg(long)]
        text: String,
    },
    /// Get a sentence by ID.
    Get { id: String },
    /// List the sentences of an article by position.
    List {
        #[arg(long)]
        article: String,
    },
}
