use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Which side of the debate topic the user takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    #[default]
    For,
    Against,
}

impl Stance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::For => "for",
            Stance::Against => "against",
        }
    }

    /// Accepts `for`/`pro` and `against`/`con`, ignoring case.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_lowercase().as_str() {
            "for" | "pro" => Ok(Stance::For),
            "against" | "con" => Ok(Stance::Against),
            unknown => Err(DomainError::invalid_input(format!(
                "unknown stance '{unknown}', expected 'for' or 'against'"
            ))),
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-call prompt settings taken from the current front-end state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestConfig {
    topic: Option<String>,
    stance: Stance,
    concise: bool,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank topics are stored as `None`.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        let trimmed = topic.trim();
        self.topic = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn with_stance(mut self, stance: Stance) -> Self {
        self.stance = stance;
        self
    }

    pub fn with_concise(mut self, concise: bool) -> Self {
        self.concise = concise;
        self
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn is_concise(&self) -> bool {
        self.concise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_config_builder() {
        let config = RequestConfig::new()
            .with_topic("school lunch")
            .with_stance(Stance::Against)
            .with_concise(true);

        assert_eq!(config.topic(), Some("school lunch"));
        assert_eq!(config.stance(), Stance::Against);
        assert!(config.is_concise());
    }

    #[test]
    fn test_blank_topic_is_absent() {
        let config = RequestConfig::new().with_topic("   ");
        assert_eq!(config.topic(), None);
    }

    #[test]
    fn test_stance_parse() {
        assert_eq!(Stance::parse("AGAINST").unwrap(), Stance::Against);
        assert_eq!(Stance::parse(" con ").unwrap(), Stance::Against);
        assert_eq!(Stance::parse("for").unwrap(), Stance::For);
    }

    #[test]
    fn test_stance_parse_rejects_typos() {
        let err = Stance::parse("agianst").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("agianst"));
    }
}
