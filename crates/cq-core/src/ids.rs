//! ID prefix constants.
//!
//! Every entity ID is `"{prefix}-{8 hex chars}"`, generated by the database
//! (see `CqDb::generate_id`).

pub const PREFIX_USER: &str = "usr";
pub const PREFIX_PROFILE: &str = "prf";
pub const PREFIX_RESEARCH: &str = "rsc";
pub const PREFIX_ARTICLE: &str = "art";
pub const PREFIX_SENTENCE: &str = "snt";
pub const PREFIX_QUESTION: &str = "qst";
pub const PREFIX_TAKE: &str = "tak";
pub const PREFIX_MILESTONE: &str = "mst";
pub const PREFIX_RESPONSE: &str = "rsp";

/// All prefixes, in schema order.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_USER,
    PREFIX_PROFILE,
    PREFIX_RESEARCH,
    PREFIX_ARTICLE,
    PREFIX_SENTENCE,
    PREFIX_QUESTION,
    PREFIX_TAKE,
    PREFIX_MILESTONE,
    PREFIX_RESPONSE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn prefixes_are_unique_and_three_chars() {
        let unique: HashSet<_> = ALL_PREFIXES.iter().collect();
        assert_eq!(unique.len(), ALL_PREFIXES.len());
        assert!(ALL_PREFIXES.iter().all(|p| p.len() == 3));
    }
}
