use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Fetch the CSRF token and logged in user once on start-up
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::util::api::{get_csrf_token, get_user};

        let _ = use_resource(move || async move {
            let csrf_token = match get_csrf_token().await {
                Ok(token) => Some(token),
                Err(err) => {
                    tracing::warn!("Failed to fetch CSRF token: {}", err);
                    None
                }
            };

            let user = match get_user().await {
                Ok(user) => user,
                Err(err) => {
                    tracing::error!("Failed to fetch user: {}", err);
                    None
                }
            };

            user_state.set(UserState {
                user,
                fetched: true,
                csrf_token,
            });
        });
    }

    rsx! {
        document::Stylesheet { href: "https://cdn.jsdelivr.net/npm/daisyui@5" }
        document::Script { src: "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" }
        Router::<Route> {}
    }
}
