
pub mod tools;
pub mod emotion_scores_tool;
pub mod sentiment_tool;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::types::{SpecificToolChoice, ToolChoice, InferenceConfiguration};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, Message, SystemContentBlock, Tool, ToolConfiguration, ToolInputSchema, ToolSpecification, ConversationRole::User};
use aws_sdk_bedrockruntime::operation::converse::ConverseOutput;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use emotion_scores_tool::get_emotion_scores_tool_definition;
use sentiment_tool::get_sentiment_tool_definition;
use tools::{ToValue, ToolDefinition};
use crate::error::ClassifyError;
use super::common_structs::{RawEmotionScore, SentimentResult};
use super::model_service::{EmotionModel, SentimentModel};


#[derive(Debug, Deserialize)]
struct EmotionScoresInput {
    scores: Vec<RawEmotionScore>,
}


/// Classifier backed by a Bedrock chat model, forced to answer through a
/// tool call so the output is structured.
#[derive(Debug, Clone)]
pub struct BedrockService {
    client: Client,
    model_id: String,
}

impl BedrockService {
    pub fn new(client: &Client, model_id: &str) -> Self {
        Self {
            client: client.to_owned(),
            model_id: model_id.to_owned(),
        }
    }

    pub async fn get_sentiment(&self, text: &str) -> Result<SentimentResult> {
        let tool_definition = get_sentiment_tool_definition();

        let system_prompt = format!("
            You will be acting as a sentiment classifier for a virtual therapy service.
            The text given will be a short message written by a user about how they feel.
            The target text will be surrounded by <text></text>.
            Decide whether the overall polarity is positive, negative or neutral.
            You have to use {} to print out the label and your confidence.
        ", tool_definition.name);

        self.invoke_tool(&tool_definition, &system_prompt, text).await
    }

    pub async fn get_emotion_scores(&self, text: &str) -> Result<Vec<RawEmotionScore>> {
        let tool_definition = get_emotion_scores_tool_definition();

        let system_prompt = format!("
            You will be acting as an AI Empath.
            Your are an expert at reading emotions within text messages.
            The text given will be a short message written by a user about how they feel.
            The target text will be surrounded by <text></text>.
            Score each of the labels happy, sad, angry, anxious, neutral and surprise independently.
            You have to use {} to print out the score for each label.
        ", tool_definition.name);

        let input: EmotionScoresInput = self.invoke_tool(&tool_definition, &system_prompt, text).await?;
        Ok(input.scores)
    }

    async fn invoke_tool<T: DeserializeOwned>(&self, tool_definition: &ToolDefinition, system_prompt: &str, text: &str) -> Result<T> {
        let tool = Tool::ToolSpec(
            ToolSpecification::builder()
                .name(&tool_definition.name)
                .description(&tool_definition.description)
                .input_schema(ToolInputSchema::Json(tool_definition.schema.to_owned()))
                .build()?
        );

        let tool_config = ToolConfiguration::builder()
            .set_tools(Some(vec![tool]))
            .tool_choice(ToolChoice::Tool(SpecificToolChoice::builder().name(&tool_definition.name).build()?))
            .build()?;

        let message = Message::builder()
            .role(User)
            .content(ContentBlock::Text(format!("<text>{}</text>", text)))
            .build()?;

        let response = self.send(system_prompt, vec![message], Some(tool_config)).await?;
        debug!(model_id = %self.model_id, tool = %tool_definition.name, "Converse response received");

        let contents = message_contents(response)?;
        find_tool_input(&contents, &tool_definition.name)
    }

    async fn send(&self, system_prompt: &str, messages: Vec<Message>, tool_config: Option<ToolConfiguration>) -> Result<ConverseOutput> {
        let builder = self.client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_owned()))
            .set_messages(Some(messages))
            .set_tool_config(tool_config)
            .inference_config(InferenceConfiguration::builder().temperature(0.0).build());

        let response = builder
            .send()
            .await
            .with_context(|| format!("Error calling converse on {}", self.model_id))?;
        Ok(response)
    }
}


#[async_trait]
impl SentimentModel for BedrockService {
    async fn classify_sentiment(&self, text: &str) -> Result<SentimentResult, ClassifyError> {
        Ok(self.get_sentiment(text).await?)
    }
}

#[async_trait]
impl EmotionModel for BedrockService {
    async fn classify_emotion(&self, text: &str) -> Result<Vec<RawEmotionScore>, ClassifyError> {
        Ok(self.get_emotion_scores(text).await?)
    }
}


fn message_contents(response: ConverseOutput) -> Result<Vec<ContentBlock>> {
    let output = response.output.context("Error getting output")?;
    match output.as_message() {
        Ok(message) => Ok(message.content.to_owned()),
        Err(output) => {
            bail!("Converse output is not message: {:?}", output)
        },
    }
}

// First tool use named `tool_name` whose input deserializes into `T`.
fn find_tool_input<T: DeserializeOwned>(contents: &[ContentBlock], tool_name: &str) -> Result<T> {
    for content in contents {
        let Ok(tool_use) = content.as_tool_use() else {
            continue;
        };

        if tool_use.name() != tool_name {
            continue;
        }

        match serde_json::from_value(tool_use.input().to_value()) {
            Ok(input) => return Ok(input),
            Err(error) => {
                debug!(%error, tool = tool_name, "Tool input did not match the expected shape");
                continue;
            },
        }
    }

    bail!("No usable {} tool use in converse output", tool_name)
}


#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use aws_sdk_bedrockruntime::types::ToolUseBlock;
    use aws_smithy_types::{Document, Number};
    use super::*;

    fn tool_use(name: &str, input: Document) -> ContentBlock {
        ContentBlock::ToolUse(
            ToolUseBlock::builder()
                .tool_use_id("tooluse_1")
                .name(name)
                .input(input)
                .build()
                .unwrap(),
        )
    }

    fn object(pairs: Vec<(&str, Document)>) -> Document {
        Document::Object(pairs.into_iter().map(|(k, v)| (k.to_owned(), v)).collect::<HashMap<_, _>>())
    }

    #[test]
    fn reads_sentiment_tool_input() {
        let contents = vec![
            ContentBlock::Text("thinking".to_owned()),
            tool_use("print_sentiment", object(vec![
                ("label", Document::String("negative".to_owned())),
                ("score", Document::Number(Number::Float(0.82))),
            ])),
        ];

        let result: SentimentResult = find_tool_input(&contents, "print_sentiment").unwrap();
        assert_eq!(result, SentimentResult::new("negative", 0.82));
    }

    #[test]
    fn reads_emotion_tool_input() {
        let scores = Document::Array(vec![
            object(vec![("label", Document::String("sad".to_owned())), ("score", Document::Number(Number::Float(0.6)))]),
            object(vec![("label", Document::String("neutral".to_owned())), ("score", Document::Number(Number::PosInt(0)))]),
        ]);
        let contents = vec![tool_use("print_emotion_scores", object(vec![("scores", scores)]))];

        let input: EmotionScoresInput = find_tool_input(&contents, "print_emotion_scores").unwrap();
        assert_eq!(input.scores, vec![
            RawEmotionScore { label: "sad".to_owned(), score: 0.6 },
            RawEmotionScore { label: "neutral".to_owned(), score: 0.0 },
        ]);
    }

    #[test]
    fn skips_other_tools_and_bad_input() {
        let contents = vec![
            tool_use("something_else", object(vec![("label", Document::String("positive".to_owned()))])),
            tool_use("print_sentiment", object(vec![("label", Document::Bool(true))])),
        ];
        assert!(find_tool_input::<SentimentResult>(&contents, "print_sentiment").is_err());
    }

    #[test]
    fn tool_definitions_are_named() {
        assert_eq!(get_sentiment_tool_definition().name, "print_sentiment");
        assert_eq!(get_emotion_scores_tool_definition().name, "print_emotion_scores");
    }
}
