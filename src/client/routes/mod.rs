pub mod auth;
pub mod dashboard;
pub mod home;
pub mod itinerary;
pub mod new_trip;
pub mod not_found;

pub use auth::{Login, Register};
pub use dashboard::Dashboard;
pub use home::Home;
pub use itinerary::Itinerary;
pub use new_trip::NewTrip;
pub use not_found::NotFound;

use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

/// Send logged out visitors to the login page once the user lookup has finished.
pub fn use_require_login() {
    let user_state = use_context::<Signal<UserState>>();
    let navigator = use_navigator();

    use_effect(move || {
        let state = user_state.read();
        if state.fetched && state.user.is_none() {
            navigator.replace(Route::Login {});
        }
    });
}
