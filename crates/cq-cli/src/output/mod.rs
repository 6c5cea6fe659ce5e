use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use cq_core::responses::SuggestionsResponse;

    use super::render;
    use crate::cli::OutputFormat;

    fn empty_suggestions() -> SuggestionsResponse {
        SuggestionsResponse {
            take_id: "tak-1".into(),
            source_milestone_id: None,
            responses: Vec::new(),
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&empty_suggestions(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["take_id"], "tak-1");
        assert!(parsed["source_milestone_id"].is_null());
        assert_eq!(parsed["responses"], serde_json::json!([]));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&empty_suggestions(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["take_id"], "tak-1");
    }
}
