use crate::domain::error::TranslateError;
use crate::domain::model::{Translation, TranslationRequest};
use crate::infrastructure::config::Config;
use crate::state::AppState;

/// Pick the API key: a non-empty override, then a non-empty configured key.
pub fn resolve_api_key<'a>(api_key_override: Option<&'a str>, config: &'a Config) -> Option<&'a str> {
    api_key_override
        .filter(|key| !key.is_empty())
        .or_else(|| config.api_key.as_deref().filter(|key| !key.is_empty()))
}

/// Translate `text`, taking the API key from the override, then the config.
///
/// Errors are returned to the caller unlogged.
pub async fn translate_text(
    state: &AppState,
    text: &str,
    api_key_override: Option<&str>,
) -> Result<Translation, TranslateError> {
    let mut request = TranslationRequest::new(text);
    if let Some(key) = resolve_api_key(api_key_override, &state.config) {
        request = request.with_api_key(key);
    }

    state.translator.translate(&request).await
}
