//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the server, so signatures do not
//! need to reach into the generated `entity` crate.

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `username` - Unique login name
/// - `password_hash` - Argon2 PHC string
/// - `created_at` - Timestamp when the account was registered
pub type UserModel = entity::user::Model;

/// Type alias for trip database model.
///
/// # Fields (from `entity::trip::Model`)
/// - `id` - Primary key
/// - `user_id` - Owning user, trips are deleted with their user
/// - `title` - Destination the itinerary was generated for
/// - `num_days` - Requested trip length
/// - `preferences` - Optional free text handed to the generator
/// - `created_at` - Timestamp when the trip was created
pub type TripModel = entity::trip::Model;

/// Type alias for itinerary day database model.
///
/// # Fields (from `entity::itinerary_day::Model`)
/// - `id` - Primary key
/// - `trip_id` - Owning trip, days are deleted with their trip
/// - `day_number` - Day within the trip, unique per trip
/// - `content` - Plan text for the day
/// - `updated_at` - Timestamp of the last (re)generation
pub type ItineraryDayModel = entity::itinerary_day::Model;
