//! Research update builder.

#[derive(Debug, Clone, Default)]
pub struct ResearchUpdate {
    pub title: Option<String>,
    pub author: Option<Option<String>>,
}

impl ResearchUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }
}

pub struct ResearchUpdateBuilder(ResearchUpdate);

impl ResearchUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ResearchUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn author(mut self, author: Option<String>) -> Self {
        self.0.author = Some(author);
        self
    }

    #[must_use]
    pub fn build(self) -> ResearchUpdate {
        self.0
    }
}

impl Default for ResearchUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
