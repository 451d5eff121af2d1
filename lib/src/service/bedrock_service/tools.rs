
use std::collections::HashMap;
use aws_smithy_types::{Document, Number};
use serde_json::Value;


pub trait ToDocument {
    fn to_document(&self) -> Document;
}

pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToDocument for Value {
    fn to_document(&self) -> Document {
        match self {
            Value::Null => Document::Null,
            Value::Bool(bool) => Document::Bool(*bool),
            Value::Number(number) => {
                if let Some(unsigned) = number.as_u64() {
                    Document::Number(Number::PosInt(unsigned))
                } else if let Some(signed) = number.as_i64() {
                    Document::Number(Number::NegInt(signed))
                } else {
                    Document::Number(Number::Float(number.as_f64().unwrap_or(0.0)))
                }
            },
            Value::String(string) => Document::String(string.to_owned()),
            Value::Array(array) => Document::Array(array.iter().map(|item| item.to_document()).collect()),
            Value::Object(object) => Document::Object(
                object
                    .iter()
                    .map(|(key, value)| (key.to_owned(), value.to_document()))
                    .collect::<HashMap<String, Document>>(),
            ),
        }
    }
}


impl ToValue for Document {
    fn to_value(&self) -> Value {
        match self {
            Document::Object(map) => Value::Object(
                map.iter().map(|(key, value)| (key.to_owned(), value.to_value())).collect(),
            ),
            Document::Array(array) => Value::Array(array.iter().map(|item| item.to_value()).collect()),
            Document::Number(number) => serde_json::Number::from_f64(number.to_f64_lossy())
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Document::String(str) => Value::String(str.to_owned()),
            Document::Bool(bool) => Value::Bool(*bool),
            Document::Null => Value::Null,
        }
    }
}


pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub schema: Document
}

impl ToolDefinition {
    pub fn new(name: &str, description: &str, schema: &Document) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            schema: schema.to_owned()
        }
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    #[test]
    fn schema_converts_to_document() {
        let document = json!({ "type": "object", "required": ["label"], "minimum": 0 }).to_document();
        let Document::Object(map) = document else {
            panic!("expected an object document");
        };
        assert_eq!(map.get("type"), Some(&Document::String("object".to_owned())));
        assert_eq!(map.get("minimum"), Some(&Document::Number(Number::PosInt(0))));
        assert_eq!(map.get("required"), Some(&Document::Array(vec![Document::String("label".to_owned())])));
    }

    #[test]
    fn tool_input_converts_to_value() {
        let document = Document::Object(HashMap::from([
            ("label".to_owned(), Document::String("positive".to_owned())),
            ("score".to_owned(), Document::Number(Number::Float(0.75))),
            ("extra".to_owned(), Document::Null),
        ]));
        assert_eq!(document.to_value(), json!({ "label": "positive", "score": 0.75, "extra": null }));
    }
}
