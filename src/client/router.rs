use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Dashboard, Home, Itinerary, Login, NewTrip, NotFound, Register},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/dashboard")]
    Dashboard {},

    #[route("/trips/new")]
    NewTrip {},

    #[route("/trip/:trip_id")]
    Itinerary { trip_id: i32 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
