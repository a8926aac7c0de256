use crate::domain::error::TranslateError;
use crate::domain::model::{Translation, TranslationRequest};
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://api.funtranslations.com/translate/shakespeare.json";

// FunTranslations response structures
#[derive(Deserialize, Debug)]
struct FunTranslationsResponse {
    contents: Option<Contents>,
}

#[derive(Deserialize, Debug)]
struct Contents {
    translated: Option<String>,
}

// Error envelope: {"error": {"code": 429, "message": "..."}}
#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: String,
}

/// FunTranslations-backed translator
#[derive(Clone)]
pub struct ShakespeareTranslator {
    client: Client,
    endpoint: String,
}

impl ShakespeareTranslator {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Translator for ShakespeareTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, TranslateError> {
        translate_shakespeare(&self.client, &self.endpoint, request).await
    }
}

pub async fn translate_shakespeare(
    client: &Client,
    endpoint: &str,
    request: &TranslationRequest,
) -> Result<Translation, TranslateError> {
    let params = [
        ("text", request.text.as_str()),
        ("api_key", request.api_key_or_empty()),
    ];

    tracing::debug!(
        endpoint,
        text = %request.text,
        has_api_key = !request.api_key_or_empty().is_empty(),
        "sending translation request"
    );

    let response = client.get(endpoint).query(&params).send().await?;
    let status = response.status();
    let body = response.text().await?;

    tracing::debug!(status = status.as_u16(), body = %body, "translation response");

    if !status.is_success() {
        return Err(TranslateError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }

    parse_translation(&body)
}

/// Pull `contents.translated` out of a successful response body.
fn parse_translation(body: &str) -> Result<Translation, TranslateError> {
    let parsed: FunTranslationsResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let contents = parsed
        .contents
        .ok_or_else(|| TranslateError::MalformedResponse("missing `contents`".to_string()))?;

    let payload = contents.translated.ok_or_else(|| {
        TranslateError::MalformedResponse("missing `contents.translated`".to_string())
    })?;

    Ok(Translation { payload })
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_translated_text() {
        let body = r#"{"success":{"total":1},"contents":{"translated":"Thou art a knave","text":"You are a fool","translation":"shakespeare"}}"#;
        let translation = parse_translation(body).unwrap();
        assert_eq!(translation.payload, "Thou art a knave");
    }

    #[test]
    fn missing_contents_is_malformed() {
        let err = parse_translation(r#"{"success":{"total":1}}"#).unwrap_err();
        assert!(matches!(err, TranslateError::MalformedResponse(ref m) if m.contains("contents")));
    }

    #[test]
    fn missing_translated_is_malformed() {
        let err = parse_translation(r#"{"contents":{"text":"hello"}}"#).unwrap_err();
        assert!(matches!(err, TranslateError::MalformedResponse(ref m) if m.contains("translated")));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = parse_translation("<html>oops</html>").unwrap_err();
        assert!(matches!(err, TranslateError::MalformedResponse(_)));
    }

    #[test]
    fn error_message_prefers_envelope() {
        let body = r#"{"error":{"code":429,"message":"Too Many Requests: Rate limit of 5 requests per hour exceeded."}}"#;
        assert_eq!(
            error_message(body),
            "Too Many Requests: Rate limit of 5 requests per hour exceeded."
        );
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }
}
