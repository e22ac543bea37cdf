use serde::{Deserialize, Serialize};

use super::Turn;

/// Body of a chat-completion POST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Turn>,
    pub temperature: f32,
}

/// The subset of a chat-completion response that is read. Every level may be
/// missing or `null` so that a sparse body still decodes to an empty answer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    choices: Option<Vec<Option<Choice>>>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

impl ChatCompletionResponse {
    /// Text of the first choice, or an empty string when there is none.
    pub fn first_content(&self) -> String {
        self.choices
            .as_deref()
            .and_then(|choices| choices.first())
            .and_then(Option::as_ref)
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.clone())
            .unwrap_or_default()
    }

    /// Number of choices, `null` entries included.
    pub fn choice_count(&self) -> usize {
        self.choices.as_ref().map_or(0, Vec::len)
    }

    pub fn usage(&self) -> Option<Usage> {
        self.usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ChatCompletionResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_first_content_reads_first_choice() {
        let response = parse(
            r#"{"choices":[{"message":{"content":"Rebuttal text"}},{"message":{"content":"second"}}]}"#,
        );
        assert_eq!(response.first_content(), "Rebuttal text");
        assert_eq!(response.choice_count(), 2);
    }

    #[test]
    fn test_sparse_bodies_read_as_empty() {
        assert_eq!(parse(r#"{"choices":[]}"#).first_content(), "");
        assert_eq!(parse("{}").first_content(), "");
        assert_eq!(parse(r#"{"choices":[{}]}"#).first_content(), "");
        assert_eq!(parse(r#"{"choices":null}"#).first_content(), "");
        assert_eq!(parse(r#"{"choices":[null]}"#).first_content(), "");
        assert_eq!(parse(r#"{"choices":[{"message":null}]}"#).first_content(), "");
        assert_eq!(
            parse(r#"{"choices":[{"message":{"content":null}}]}"#).first_content(),
            ""
        );
    }

    #[test]
    fn test_usage_is_optional() {
        let response = parse(
            r#"{"choices":[],"usage":{"prompt_tokens":12,"completion_tokens":30,"total_tokens":42}}"#,
        );
        assert_eq!(response.usage().map(|u| u.total_tokens), Some(42));
        assert!(parse("{}").usage().is_none());
    }

    #[test]
    fn test_null_choices_count_as_none() {
        assert_eq!(parse(r#"{"choices":null}"#).choice_count(), 0);
        assert_eq!(parse(r#"{"choices":[null]}"#).choice_count(), 1);
    }

    #[test]
    fn test_request_wire_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![Turn::system("rules"), Turn::user("claim")],
            temperature: 0.7,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "claim");
        assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }
}
