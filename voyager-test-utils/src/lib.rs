pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_AI_API_KEY, TEST_PASSWORD},
        fixtures::ai::{day_text, itinerary_text, responses_body},
        TestBuilder, TestContext, TestError,
    };
}
