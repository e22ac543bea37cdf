use crate::domain::{RequestConfig, Turn, UserMessage};

const ROLE_LINE: &str = "Role: You are a debater whose job is to rebut the user's claims.";

const RULES_LINE: &str = "Rules: Rebut the claim the user makes with sound logic, \
present verifiable evidence, and offer practical advice when it helps.";

const LENGTH_MATCH_LINE: &str =
    "Length: Answer at roughly the same length as the user's message.";

const LENGTH_CONCISE_LINE: &str =
    "Length: Concise mode is on. Keep the whole answer to at most 3 sentences.";

const EVIDENCE_LINE: &str = "Evidence check: If the user's claim lacks evidence or data, \
or does not hold up, politely ask in one sentence what evidence it is based on.";

const FORMAT_LINE: &str = "Format: Answer in the order \"rebuttal - evidence - advice (optional)\". \
If the claim lacks evidence, end with exactly one clarifying question about its evidence.";

const TONE_LINE: &str = "Tone: Avoid categorical statements. Stay constructive and \
centred on facts and data.";

/// Builds the system instruction for one call.
///
/// The topic line is present only when a topic is set. Concise mode swaps the
/// length-matching instruction for a 3-sentence cap.
pub fn build_system_prompt(config: &RequestConfig) -> String {
    let length_line = if config.is_concise() {
        LENGTH_CONCISE_LINE
    } else {
        LENGTH_MATCH_LINE
    };

    let mut lines = vec![
        ROLE_LINE.to_string(),
        RULES_LINE.to_string(),
        length_line.to_string(),
        EVIDENCE_LINE.to_string(),
        FORMAT_LINE.to_string(),
        TONE_LINE.to_string(),
    ];

    if let Some(topic) = config.topic() {
        lines.push(format!("Debate topic: {topic}"));
    }

    lines.join("\n")
}

/// `[system] ++ history ++ [user]`, with `history` copied in order.
pub fn assemble_messages(
    config: &RequestConfig,
    history: &[Turn],
    user_message: &UserMessage,
) -> Vec<Turn> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Turn::system(build_system_prompt(config)));
    messages.extend_from_slice(history);
    messages.push(Turn::user(user_message.as_str()));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, Stance};

    const CAP: &str = "3 sentences";

    #[test]
    fn test_concise_prompt_has_sentence_cap() {
        let prompt = build_system_prompt(&RequestConfig::new().with_concise(true));
        assert!(prompt.contains(CAP));
        assert!(!prompt.contains(LENGTH_MATCH_LINE));
    }

    #[test]
    fn test_default_prompt_matches_user_length() {
        for stance in [Stance::For, Stance::Against] {
            let config = RequestConfig::new()
                .with_topic("recycling deposits")
                .with_stance(stance);
            let prompt = build_system_prompt(&config);
            assert!(!prompt.contains(CAP));
            assert!(prompt.contains("same length as the user's message"));
        }
    }

    #[test]
    fn test_topic_line_is_optional() {
        let with_topic = build_system_prompt(&RequestConfig::new().with_topic("school lunch"));
        assert!(with_topic.ends_with("Debate topic: school lunch"));

        let without_topic = build_system_prompt(&RequestConfig::new());
        assert!(!without_topic.contains("Debate topic"));
        assert!(without_topic.ends_with(TONE_LINE));
    }

    #[test]
    fn test_prompt_always_mandates_shape_and_question() {
        for concise in [true, false] {
            let prompt = build_system_prompt(&RequestConfig::new().with_concise(concise));
            assert!(prompt.contains("rebuttal - evidence - advice (optional)"));
            assert!(prompt.contains("one clarifying question"));
        }
    }

    #[test]
    fn test_assemble_messages_order() {
        let history = vec![
            Turn::assistant("greeting"),
            Turn::user("first claim"),
            Turn::assistant("first rebuttal"),
        ];
        let user = UserMessage::parse("second claim").unwrap();

        let messages = assemble_messages(&RequestConfig::new(), &history, &user);

        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0].role(), Role::System);
        assert_eq!(&messages[1..4], history.as_slice());
        assert_eq!(messages[4], Turn::user("second claim"));
    }
}
