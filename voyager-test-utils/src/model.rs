//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main voyager crate to keep fixture signatures short.

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for trip database model.
pub type TripModel = entity::trip::Model;

/// Type alias for itinerary day database model.
pub type ItineraryDayModel = entity::itinerary_day::Model;
