use cq_db::repos::take::TakeFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    owner: Option<&str>,
    article: Option<&str>,
    question: Option<&str>,
    include_removed: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user_id = match owner {
        Some(username) => Some(ctx.service.get_user_by_username(username).await?.id),
        None => None,
    };

    let filter = build_filter(
        user_id,
        article,
        question,
        include_removed,
        effective_limit(flags.limit, ctx.config.general.default_limit),
    );
    let takes = ctx.service.list_takes(&filter).await?;
    output(&takes, flags.format)
}

fn build_filter(
    user_id: Option<String>,
    article: Option<&str>,
    question: Option<&str>,
    include_removed: bool,
    limit: u32,
) -> TakeFilter {
    TakeFilter {
        user_id,
        article_id: article.map(String::from),
        question_id: question.map(String::from),
        include_removed,
        limit: Some(limit),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::build_filter;

    #[test]
    fn filter_carries_every_criterion() {
        let filter = build_filter(Some("usr-1".into()), Some("art-1"), None, true, 5);
        assert_eq!(filter.user_id.as_deref(), Some("usr-1"));
        assert_eq!(filter.article_id.as_deref(), Some("art-1"));
        assert_eq!(filter.question_id, None);
        assert!(filter.include_removed);
        assert_eq!(filter.limit, Some(5));
    }
}
