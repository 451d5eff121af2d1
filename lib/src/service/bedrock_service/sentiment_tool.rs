use serde_json::json;
use super::tools::{ToDocument, ToolDefinition};


pub fn get_sentiment_tool_definition() -> ToolDefinition {
    let name = "print_sentiment";
    let description = "Print the overall sentiment of a given text.";

    let json_schema = json!({
        "type": "object",
        "properties": {
            "label": {
                "type": "string",
                "enum": ["positive", "negative", "neutral"],
                "description": "Overall polarity of the text.",
            },
            "score": {
                "type": "number",
                "description": "Confidence for the label, ranging from 0.0 to 1.0.",
            },
        },
        "required": ["label", "score"],
    });

    ToolDefinition::new(name, description, &json_schema.to_document())
}
