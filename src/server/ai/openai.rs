//! OpenAI Responses API client.

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::server::{
    ai::{parse, prompt, DayPlan, Itinerary, ItineraryGenerator},
    error::ai::AiError,
};

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
    store: bool,
}

#[derive(Deserialize, Default)]
struct ResponsesReply {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl ResponsesReply {
    /// Concatenated `output_text` of every assistant message.
    fn output_text(&self) -> String {
        self.output
            .iter()
            .filter(|item| item.kind == "message")
            .flat_map(|item| item.content.iter())
            .filter(|content| content.kind == "output_text")
            .map(|content| content.text.as_str())
            .collect()
    }
}

/// Itinerary generator backed by the OpenAI Responses API.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Create a client for the API at `base_url`, e.g. `https://api.openai.com`.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();

        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a single prompt and return the assistant's output text.
    ///
    /// # Returns
    /// - `Ok(String)` - Non-empty output text
    /// - `Err(AiError::Request)` - Transport failure or undecodable body
    /// - `Err(AiError::Status)` - The API answered with a non-success status
    /// - `Err(AiError::EmptyOutput)` - The reply carried no output text
    pub async fn complete(&self, input: &str) -> Result<String, AiError> {
        let url = format!("{}/v1/responses", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ResponsesRequest {
                model: &self.model,
                input,
                store: true,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(AiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ResponsesReply = response.json().await?;
        let text = reply.output_text();

        if text.trim().is_empty() {
            return Err(AiError::EmptyOutput);
        }

        Ok(text)
    }
}

impl ItineraryGenerator for OpenAiClient {
    async fn generate_itinerary(
        &self,
        destination: &str,
        days: i32,
        preferences: Option<&str>,
    ) -> Result<Itinerary, AiError> {
        let text = self
            .complete(&prompt::itinerary_prompt(destination, days, preferences))
            .await?;

        match parse::parse_itinerary(&text, days) {
            Err(AiError::MalformedReply(reason)) => {
                tracing::warn!(
                    "Itinerary reply for {} was not valid JSON ({}), retrying with strict prompt",
                    destination,
                    reason
                );

                let text = self
                    .complete(&prompt::strict_itinerary_prompt(
                        destination,
                        days,
                        preferences,
                    ))
                    .await?;

                parse::parse_itinerary(&text, days)
            }
            result => result,
        }
    }

    async fn regenerate_day(
        &self,
        destination: &str,
        day: i32,
        total_days: i32,
        preferences: Option<&str>,
    ) -> Result<DayPlan, AiError> {
        let text = self
            .complete(&prompt::day_prompt(destination, day, total_days, preferences))
            .await?;

        parse::parse_day(&text, day)
    }
}
