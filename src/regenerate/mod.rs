//! Per-day itinerary regeneration.
//!
//! Activating a day's regenerate control posts to
//! `/trip/{trip_id}/day/{day}/regenerate` and swaps the returned text into that day only.
//! The flow is platform neutral: the HTTP call goes through [`RegenerateTransport`] and every
//! visible effect goes through [`DaySurface`]. The web client implements both on top of
//! reqwasm and Dioxus signals, the tests implement them with in-memory fakes.
//!
//! Each control moves through `Idle -> Requesting -> (Success | Failed) -> Idle`. While a
//! request is outstanding the control is disabled and shows a loading label; it is restored
//! when the request settles whatever the outcome.

pub mod config;
pub mod error;
pub mod flow;
pub mod surface;
pub mod transport;

pub use config::RegenerateConfig;
pub use error::RegenerateError;
pub use flow::{RegenerateOutcome, Regenerator};
pub use surface::DaySurface;
pub use transport::{RegenerateTransport, TransportResponse};
