use serde::{Deserialize, Serialize};

// 一次翻译请求，每次调用重新构造
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub api_key: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Key as sent on the wire; absent keys go out as an empty string.
    pub fn api_key_or_empty(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }
}

// 翻译结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub payload: String,
}
