use crate::domain::error::TranslateError;
use crate::domain::traits::Translator;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::ShakespeareTranslator;
use crate::infrastructure::network::http::create_client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, TranslateError> {
        let http_client = create_client(&config)?;
        let translator = ShakespeareTranslator::new(http_client, config.endpoint.clone());

        Ok(Self::with_translator(config, Arc::new(translator)))
    }

    /// Build state around an existing translator (used by tests to inject fakes).
    pub fn with_translator(config: Config, translator: Arc<dyn Translator>) -> Self {
        Self {
            config: Arc::new(config),
            translator,
        }
    }
}
