use serde_json::json;
use super::tools::{ToDocument, ToolDefinition};


pub fn get_emotion_scores_tool_definition() -> ToolDefinition {
    let name = "print_emotion_scores";
    let description = "Print a score for each emotion label detected in a given text.";

    let json_schema = json!({
        "type": "object",
        "properties": {
            "scores": {
                "type": "array",
                "description": "One entry per emotion label.",
                "items": {
                    "type": "object",
                    "properties": {
                        "label": {
                            "type": "string",
                            "description": "Emotion label, one of happy, sad, angry, anxious, neutral, surprise.",
                        },
                        "score": {
                            "type": "number",
                            "description": "Confidence for the label, ranging from 0.0 to 1.0.",
                        },
                    },
                    "required": ["label", "score"],
                },
            },
        },
        "required": ["scores"],
    });

    ToolDefinition::new(name, description, &json_schema.to_document())
}
