use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ArticleCommands, MilestoneCommands, QuestionCommands, ResearchCommands, ResponseCommands,
    SentenceCommands, TakeCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Researches.
    Research {
        #[command(subcommand)]
        action: ResearchCommands,
    },
    /// Articles of a research.
    Article {
        #[command(subcommand)]
        action: ArticleCommands,
    },
    /// Sentences of an article.
    Sentence {
        #[command(subcommand)]
        action: SentenceCommands,
    },
    /// Questions.
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Users and participant registration.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Participant takes.
    Take {
        #[command(subcommand)]
        action: TakeCommands,
    },
    /// Milestones of a take.
    Milestone {
        #[command(subcommand)]
        action: MilestoneCommands,
    },
    /// Responses of a milestone.
    Response {
        #[command(subcommand)]
        action: ResponseCommands,
    },
    /// Print the JSON schema of an entity or response type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity (e.g. `take`) or response type (e.g. `take_detail`).
    pub type_name: String,
}
