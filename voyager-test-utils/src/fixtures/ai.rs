//! OpenAI Responses API mock endpoints.
//!
//! The voyager AI client posts to `/v1/responses` and reads the assistant text from
//! `output[].content[].text`. These helpers produce that envelope around the JSON the
//! itinerary parser expects.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{constant::TEST_AI_RESPONSES_PATH, TestContext};

impl TestContext {
    pub fn ai<'a>(&'a mut self) -> AiFixtures<'a> {
        AiFixtures { setup: self }
    }
}

pub struct AiFixtures<'a> {
    setup: &'a mut TestContext,
}

/// Wrap assistant text in a Responses API reply body.
///
/// # Arguments
/// - `text` - The assistant output text
///
/// # Returns
/// - `String` - Serialized response body
pub fn responses_body(text: &str) -> String {
    json!({
        "id": "resp_test",
        "object": "response",
        "status": "completed",
        "output": [
            {
                "type": "reasoning",
                "id": "rs_test",
                "summary": []
            },
            {
                "type": "message",
                "id": "msg_test",
                "role": "assistant",
                "content": [
                    {
                        "type": "output_text",
                        "text": text,
                        "annotations": []
                    }
                ]
            }
        ]
    })
    .to_string()
}

/// Build the `{"days": [...]}` document for the given summaries, numbered from 1.
pub fn itinerary_text(summaries: &[String]) -> String {
    let days: Vec<_> = summaries
        .iter()
        .enumerate()
        .map(|(i, summary)| json!({ "day": i + 1, "summary": summary }))
        .collect();

    json!({ "days": days }).to_string()
}

/// Build the `{"day", "summary"}` document for a single day.
pub fn day_text(day: i32, summary: &str) -> String {
    json!({ "day": day, "summary": summary }).to_string()
}

impl<'a> AiFixtures<'a> {
    /// Create a mock endpoint returning a full itinerary.
    ///
    /// # Arguments
    /// - `summaries` - One summary per day, in day order
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock for later assertion
    pub fn create_itinerary_endpoint(
        &mut self,
        summaries: &[String],
        expected_requests: usize,
    ) -> Mock {
        self.create_text_endpoint(&itinerary_text(summaries), expected_requests)
    }

    /// Create a mock endpoint returning a single regenerated day.
    pub fn create_day_endpoint(
        &mut self,
        day: i32,
        summary: &str,
        expected_requests: usize,
    ) -> Mock {
        self.create_text_endpoint(&day_text(day, summary), expected_requests)
    }

    /// Create a mock endpoint replying with arbitrary assistant text.
    ///
    /// Useful for malformed or fenced output.
    pub fn create_text_endpoint(&mut self, text: &str, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_AI_RESPONSES_PATH)
            .match_header("authorization", Matcher::Regex("^Bearer .+".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(responses_body(text))
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint that fails with the given HTTP status.
    pub fn create_error_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_AI_RESPONSES_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"upstream failure","type":"server_error"}}"#)
            .expect(expected_requests)
            .create()
    }
}
