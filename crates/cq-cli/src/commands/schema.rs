use cq_core::entities::{
    Article, ArticleLoad, Milestone, Profile, Question, Research, Response, Sentence, Take, User,
};
use cq_core::enums::EntityType;
use cq_core::responses::{MilestoneDetail, Registration, SuggestionsResponse, TakeDetail};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

const RESPONSE_TYPES: [&str; 5] = [
    "article_load",
    "milestone_detail",
    "registration",
    "suggestions",
    "take_detail",
];

/// Handle `cq schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_by_name(&args.type_name)?;
    output(&schema, flags.format)
}

fn schema_by_name(name: &str) -> anyhow::Result<Schema> {
    let normalized = name.trim().replace('-', "_");
    let schema = match normalized.as_str() {
        "article_load" => schema_for!(ArticleLoad),
        "milestone_detail" => schema_for!(MilestoneDetail),
        "registration" => schema_for!(Registration),
        "suggestions" => schema_for!(SuggestionsResponse),
        "take_detail" => schema_for!(TakeDetail),
        _ => {
            let entity = parse_enum::<EntityType>(&normalized, "type").map_err(|error| {
                anyhow::anyhow!("{error}; response types: {}", RESPONSE_TYPES.join(", "))
            })?;
            entity_schema(entity)
        }
    };
    Ok(schema)
}

fn entity_schema(entity: EntityType) -> Schema {
    match entity {
        EntityType::User => schema_for!(User),
        EntityType::Profile => schema_for!(Profile),
        EntityType::Research => schema_for!(Research),
        EntityType::Article => schema_for!(Article),
        EntityType::Sentence => schema_for!(Sentence),
        EntityType::Question => schema_for!(Question),
        EntityType::Take => schema_for!(Take),
        EntityType::Milestone => schema_for!(Milestone),
        EntityType::Response => schema_for!(Response),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::schema_by_name;

    #[test]
    fn entity_schema_lists_fields() {
        let schema = schema_by_name("milestone").expect("schema should exist");
        let value = serde_json::to_value(&schema).expect("schema serializes");
        let properties = value["properties"].as_object().expect("object schema");
        assert!(properties.contains_key("copied_from"));
        assert!(properties.contains_key("response_at"));
    }

    #[test]
    fn optional_milestone_fields_are_not_required() {
        let schema = schema_by_name("milestone").expect("schema should exist");
        let value = serde_json::to_value(&schema).expect("schema serializes");
        let mut required: Vec<&str> = value["required"]
            .as_array()
            .expect("required list")
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        required.sort_unstable();
        assert_eq!(
            required,
            vec!["created_at", "id", "response_at", "take_id", "user_id"]
        );
    }

    #[test]
    fn response_type_accepts_hyphens() {
        let schema = schema_by_name("take-detail").expect("schema should exist");
        let value = serde_json::to_value(&schema).expect("schema serializes");
        assert!(value["properties"]["milestones"].is_object());
    }

    #[test]
    fn unknown_type_lists_alternatives() {
        let err = schema_by_name("codebook").expect_err("should fail");
        let message = err.to_string();
        assert!(message.contains("invalid type 'codebook'"));
        assert!(message.contains("take_detail"));
    }
}
