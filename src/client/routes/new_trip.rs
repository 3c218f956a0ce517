use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use validator::Validate;
#[cfg(feature = "web")]
use voyager::model::trip::CreateTripDto;
use voyager::model::trip::MAX_TRIP_DAYS;

#[cfg(feature = "web")]
use crate::client::router::Route;
use crate::client::{components::Page, routes::use_require_login, store::user::UserState};

#[component]
pub fn NewTrip() -> Element {
    use_require_login();

    #[allow(unused_variables)]
    let user_state = use_context::<Signal<UserState>>();
    #[allow(unused_variables)]
    let navigator = use_navigator();

    let mut title = use_signal(String::new);
    let mut num_days = use_signal(|| 3);
    let mut preferences = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut generating = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            let preferences = preferences.read().trim().to_string();
            let payload = CreateTripDto {
                title: title.read().trim().to_string(),
                num_days: num_days(),
                preferences: (!preferences.is_empty()).then_some(preferences),
            };
            if let Err(errors) = payload.validate() {
                error.set(Some(errors.to_string()));
                return;
            }

            let csrf_token = user_state.read().csrf_token().to_string();
            error.set(None);
            generating.set(true);

            spawn(async move {
                match crate::client::util::api::create_trip(&csrf_token, &payload).await {
                    Ok(detail) => {
                        navigator.push(Route::Itinerary {
                            trip_id: detail.trip.id,
                        });
                    }
                    Err(err) => error.set(Some(err)),
                }
                generating.set(false);
            });
        }
    };

    rsx!(
        Title { "New Trip | Voyager" }
        Page { class: "flex justify-center",
            form { class: "card bg-base-100 shadow-sm w-full max-w-xl mt-8",
                onsubmit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Plan a new trip" }
                    if let Some(err) = error() {
                        div { class: "alert alert-error", role: "alert",
                            span { "{err}" }
                        }
                    }
                    label { class: "floating-label",
                        span { "Destination" }
                        input {
                            class: "input w-full",
                            r#type: "text",
                            placeholder: "Destination",
                            maxlength: 100,
                            value: "{title}",
                            oninput: move |evt| title.set(evt.value()),
                        }
                    }
                    label { class: "floating-label",
                        span { "Number of days" }
                        input {
                            class: "input w-full",
                            r#type: "number",
                            min: 1,
                            max: MAX_TRIP_DAYS,
                            value: "{num_days}",
                            oninput: move |evt| {
                                if let Ok(days) = evt.value().parse::<i32>() {
                                    num_days.set(days);
                                }
                            },
                        }
                    }
                    label { class: "floating-label",
                        span { "Preferences (optional)" }
                        textarea {
                            class: "textarea w-full",
                            placeholder: "Food, museums, hiking, budget...",
                            value: "{preferences}",
                            oninput: move |evt| preferences.set(evt.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: generating(),
                        if generating() {
                            span { class: "loading loading-spinner" }
                            "Generating your itinerary..."
                        } else {
                            "Generate Itinerary"
                        }
                    }
                }
            }
        }
    )
}
