use clap::Subcommand;

/// Milestone commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MilestoneCommands {
    /// Save a new milestone on a take with the given sentences, in order.
    Renew {
        take_id: String,
        /// Sentence ID; repeat for each highlighted sentence.
        #[arg(long = "sentence")]
        sentences: Vec<String>,
        /// Mark the milestone as found now.
        #[arg(long)]
        found: bool,
    },
    /// Get a milestone with its responses.
    Get { id: String },
    /// List the milestones of a take.
    List {
        #[arg(long)]
        take: String,
        /// Only the most recent milestone.
        #[arg(long)]
        current: bool,
    },
    /// Update a milestone's found marker or response time.
    Update {
        id: String,
        /// RFC 3339 timestamp, or `now`.
        #[arg(long, conflicts_with = "clear_found")]
        found: Option<String>,
        #[arg(long)]
        clear_found: bool,
        /// RFC 3339 timestamp, or `now`.
        #[arg(long)]
        response_at: Option<String>,
    },
}
