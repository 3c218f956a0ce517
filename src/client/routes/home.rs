use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::user::UserState};

#[component]
pub fn Home() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx!(
        Title { "Voyager" }
        Meta {
            name: "description",
            content: "Plan multi-day trips with AI generated itineraries."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-xl text-center",
                h1 { class: "text-4xl font-bold",
                    "Voyager"
                }
                p {
                    "Tell us where you're going and for how long. Voyager drafts a day by day itinerary, and any day you don't like can be regenerated on its own."
                }
                ul { class: "flex gap-2",
                    if state.user.is_some() {
                        li {
                            Link { to: Route::NewTrip {}, class: "btn btn-primary w-36",
                                "Plan a Trip"
                            }
                        }
                        li {
                            Link { to: Route::Dashboard {}, class: "btn btn-outline w-36",
                                "My Trips"
                            }
                        }
                    } else if state.fetched {
                        li {
                            Link { to: Route::Register {}, class: "btn btn-primary w-36",
                                "Get Started"
                            }
                        }
                        li {
                            Link { to: Route::Login {}, class: "btn btn-outline w-36",
                                "Login"
                            }
                        }
                    }
                }
            }
        }
    )
}
