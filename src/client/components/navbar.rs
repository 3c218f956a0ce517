use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

#[component]
pub fn Navbar() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "text-xl font-semibold",
                    "Voyager"
                }
            }
            div {
                class: "navbar-end",
                ul { class: "flex items-center gap-2",
                    if let Some(user) = state.user.as_ref() {
                        li {
                            Link { to: Route::Dashboard {}, class: "btn btn-ghost",
                                "My Trips"
                            }
                        }
                        li {
                            Link { to: Route::NewTrip {}, class: "btn btn-primary",
                                "New Trip"
                            }
                        }
                        li { class: "text-sm opacity-70 px-2",
                            "{user.username}"
                        }
                        li {
                            // Full page load so the app restarts with a fresh session
                            a { href: "/api/auth/logout", class: "btn btn-outline",
                                "Logout"
                            }
                        }
                    } else if state.fetched {
                        li {
                            Link { to: Route::Login {}, class: "btn btn-ghost",
                                "Login"
                            }
                        }
                        li {
                            Link { to: Route::Register {}, class: "btn btn-primary",
                                "Register"
                            }
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
