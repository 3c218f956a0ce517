//! AI itinerary generation.
//!
//! [`ItineraryGenerator`] is the seam services depend on. [`openai::OpenAiClient`] implements it
//! against the OpenAI Responses API; prompt text lives in [`prompt`] and reply validation in
//! [`parse`].

pub mod openai;
pub mod parse;
pub mod prompt;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::server::error::ai::AiError;

/// One generated day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: i32,
    pub summary: String,
}

/// A generated multi-day itinerary, in the order the model returned it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub days: Vec<DayPlan>,
}

/// Produces itinerary text for trips.
pub trait ItineraryGenerator {
    /// Generate a full itinerary for a `days` long trip to `destination`.
    fn generate_itinerary(
        &self,
        destination: &str,
        days: i32,
        preferences: Option<&str>,
    ) -> impl Future<Output = Result<Itinerary, AiError>> + Send;

    /// Generate a replacement plan for day `day` of a `total_days` long trip.
    ///
    /// The returned plan always carries the requested day number.
    fn regenerate_day(
        &self,
        destination: &str,
        day: i32,
        total_days: i32,
        preferences: Option<&str>,
    ) -> impl Future<Output = Result<DayPlan, AiError>> + Send;
}
