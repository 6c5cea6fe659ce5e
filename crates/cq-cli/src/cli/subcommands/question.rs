use clap::Subcommand;

/// Question commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// Create a question owned by the acting user.
    Create {
        #[arg(long)]
        research: String,
        #[arg(long)]
        content: String,
        /// Phase label the question was created in.
        #[arg(long)]
        phase: Option<String>,
    },
    /// Get a question by ID.
    Get { id: String },
    /// List questions.
    List {
        #[arg(long)]
        research: Option<String>,
        #[arg(long)]
        phase: Option<String>,
    },
}
