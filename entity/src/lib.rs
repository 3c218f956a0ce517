pub mod prelude;

pub mod itinerary_day;
pub mod trip;
pub mod user;
