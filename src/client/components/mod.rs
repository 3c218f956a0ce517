pub mod day_card;
pub mod navbar;
pub mod page;
pub mod toast;
pub mod trip_card;

pub use day_card::DayCard;
pub use navbar::Navbar;
pub use page::Page;
pub use toast::Toast;
pub use trip_card::TripCard;
