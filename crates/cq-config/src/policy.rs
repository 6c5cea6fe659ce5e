//! Selection policy shared by the article balancer and the lineage resolver.

use cq_core::enums::TieBreak;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PolicyConfig {
    /// Which candidate wins on equal profile counts / equal `response_at`.
    #[serde(default)]
    pub tie_break: TieBreak,
}
