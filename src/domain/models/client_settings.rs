pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";

/// Connection settings for the completion endpoint, resolved once at
/// start-up and handed to the client.
#[derive(Clone, PartialEq)]
pub struct ClientSettings {
    api_key: Option<String>,
    endpoint: String,
    model: String,
    temperature: f32,
}

impl ClientSettings {
    pub fn new() -> Self {
        Self {
            api_key: None,
            endpoint: endpoint_for(DEFAULT_BASE_URL),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Reads the settings from the process environment:
    ///
    /// | Variable          | Default                  |
    /// |-------------------|--------------------------|
    /// | `OPENAI_API_KEY`  | none                     |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com` |
    /// | `OPENAI_MODEL`    | `gpt-4o-mini`            |
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientSettings::from_env`] with an injectable variable
    /// source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut settings = Self::new();
        if let Some(key) = read(API_KEY_VAR) {
            settings = settings.with_api_key(key);
        }
        if let Some(base) = read(BASE_URL_VAR) {
            settings = settings.with_base_url(&base);
        }
        if let Some(model) = read(MODEL_VAR) {
            settings = settings.with_model(model);
        }
        settings
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.endpoint = endpoint_for(base_url);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// The credential, if one is configured and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::new()
    }
}

// Hand-written so the credential never ends up in logs.
impl std::fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSettings")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

fn endpoint_for(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with(CHAT_COMPLETIONS_PATH) {
        return trimmed.to_string();
    }
    format!("{trimmed}{CHAT_COMPLETIONS_PATH}")
}
