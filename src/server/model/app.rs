use sea_orm::DatabaseConnection;

use crate::server::{ai::openai::OpenAiClient, config::DEFAULT_OPENAI_MODEL};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub ai_client: OpenAiClient,
}

/// Build state from a database connection, AI base URL and API key using the default model.
impl From<(DatabaseConnection, String, String)> for AppState {
    fn from((db, ai_base_url, ai_api_key): (DatabaseConnection, String, String)) -> Self {
        Self {
            db,
            ai_client: OpenAiClient::new(ai_base_url, ai_api_key, DEFAULT_OPENAI_MODEL),
        }
    }
}
