use crate::domain::error::TranslateError;
use crate::domain::model::{Translation, TranslationRequest};
use async_trait::async_trait;

/// Trait for translation services
///
/// Callers hold a `dyn Translator` so the HTTP-backed adapter can be swapped
/// for a fake in tests or pointed at a different endpoint.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate one request. Exactly one outcome per call, no partial results.
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, TranslateError>;
}
