//! Translate plain English into Shakespearean English through the
//! FunTranslations web service.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod state;

pub use domain::error::TranslateError;
pub use domain::model::{Translation, TranslationRequest};
pub use domain::traits::Translator;
pub use infrastructure::network::client::{ShakespeareTranslator, DEFAULT_ENDPOINT};
