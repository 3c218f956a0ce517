use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;
use voyager::model::trip::TripDto;

use crate::client::{
    components::{Page, TripCard},
    router::Route,
    routes::use_require_login,
    store::user::UserState,
};

#[component]
pub fn Dashboard() -> Element {
    use_require_login();

    #[allow(unused_variables)]
    let user_state = use_context::<Signal<UserState>>();
    #[allow(unused_mut)]
    let mut trips = use_signal(|| None::<Vec<TripDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    // Retrieve trips on component load
    #[cfg(feature = "web")]
    {
        let _ = use_resource(move || async move {
            match crate::client::util::api::list_trips().await {
                Ok(list) => trips.set(Some(list)),
                Err(err) => {
                    tracing::error!("Failed to load trips: {}", err);
                    error.set(Some(err));
                }
            }
        });
    }

    #[allow(unused_variables)]
    let on_delete = move |trip_id: i32| {
        #[cfg(feature = "web")]
        {
            let csrf_token = user_state.read().csrf_token().to_string();

            spawn(async move {
                match crate::client::util::api::delete_trip(&csrf_token, trip_id).await {
                    Ok(()) => {
                        if let Some(list) = trips.write().as_mut() {
                            list.retain(|t| t.id != trip_id);
                        }
                    }
                    Err(err) => {
                        tracing::error!("Failed to delete trip {}: {}", trip_id, err);
                        error.set(Some(err));
                    }
                }
            });
        }
    };

    rsx!(
        Title { "My Trips | Voyager" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-3xl flex flex-col gap-4",
                div { class: "flex items-center justify-between",
                    h1 { class: "text-2xl font-semibold", "My Trips" }
                    Link { to: Route::NewTrip {}, class: "btn btn-primary",
                        "New Trip"
                    }
                }
                if let Some(err) = error() {
                    div { class: "alert alert-error", role: "alert",
                        span { "{err}" }
                    }
                }
                match trips() {
                    None => rsx!(
                        div { class: "skeleton h-32 w-full" }
                    ),
                    Some(list) if list.is_empty() => rsx!(
                        p { class: "opacity-70",
                            "No trips yet. Plan your first one!"
                        }
                    ),
                    Some(list) => rsx!(
                        for trip in list {
                            TripCard { key: "{trip.id}", trip: trip.clone(), on_delete }
                        }
                    ),
                }
            }
        }
    )
}
