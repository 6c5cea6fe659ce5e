//! Milestone update builder.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct MilestoneUpdate {
    /// Set (`Some(Some(ts))`) or clear (`Some(None)`) the found marker.
    pub found: Option<Option<DateTime<Utc>>>,
    pub response_at: Option<DateTime<Utc>>,
}

impl MilestoneUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.found.is_none() && self.response_at.is_none()
    }
}

pub struct MilestoneUpdateBuilder(MilestoneUpdate);

impl MilestoneUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(MilestoneUpdate::default())
    }

    #[must_use]
    pub fn found(mut self, found: Option<DateTime<Utc>>) -> Self {
        self.0.found = Some(found);
        self
    }

    #[must_use]
    pub fn response_at(mut self, response_at: DateTime<Utc>) -> Self {
        self.0.response_at = Some(response_at);
        self
    }

    #[must_use]
    pub fn build(self) -> MilestoneUpdate {
        self.0
    }
}

impl Default for MilestoneUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_found_is_not_empty() {
        assert!(MilestoneUpdateBuilder::new().build().is_empty());

        let update = MilestoneUpdateBuilder::new().found(None).build();
        assert!(!update.is_empty());
        assert_eq!(update.found, Some(None));
        assert_eq!(update.response_at, None);
    }
}
