//! Shared constants used across test fixtures.

/// Plain-text password every fixture user is created with.
pub static TEST_PASSWORD: &str = "correct-horse-battery";

/// API key handed to the itinerary client when pointed at the mock server.
pub static TEST_AI_API_KEY: &str = "sk-test-voyager";

/// Path of the OpenAI Responses endpoint on the mock server.
pub static TEST_AI_RESPONSES_PATH: &str = "/v1/responses";
