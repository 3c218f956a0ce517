use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(not(feature = "web"))]
use dioxus_logger::tracing;
use voyager::model::trip::TripDto;

use crate::client::{
    components::{DayCard, Page, Toast},
    router::Route,
    routes::use_require_login,
    util::regenerate::SignalSurface,
};

/// Itinerary page: the trip's days, each with its own regenerate control.
#[component]
pub fn Itinerary(trip_id: i32) -> Element {
    use_require_login();

    let surface = use_hook(SignalSurface::new);
    #[allow(unused_mut)]
    let mut trip = use_signal(|| None::<TripDto>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let regenerator = crate::client::util::regenerate::use_regenerator(surface);

    // Retrieve the trip on component load
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        let _ = use_resource(move || async move {
            match crate::client::util::api::get_trip(trip_id).await {
                Ok(detail) => {
                    surface.set_days(detail.days);
                    trip.set(Some(detail.trip));
                }
                Err(err) => {
                    tracing::error!("Failed to load trip {}: {}", trip_id, err);
                    error.set(Some(err));
                }
            }
        });
    }

    let on_regenerate = move |day_attr: String| {
        #[cfg(feature = "web")]
        crate::client::util::regenerate::activate_day(regenerator, trip_id, day_attr);

        #[cfg(not(feature = "web"))]
        tracing::debug!("Regeneration of day {} requires the browser client", day_attr);
    };

    let days = surface.days.read().clone();

    rsx!(
        Title { "Itinerary | Voyager" }
        Page { class: "flex flex-col items-center",
            Toast { toast: surface.toast.read().clone() }
            div {
                id: "itinerary",
                class: "w-full max-w-3xl flex flex-col gap-4",
                "data-trip-id": "{trip_id}",
                if let Some(err) = error() {
                    div { class: "alert alert-error", role: "alert",
                        span { "{err}" }
                    }
                    Link { to: Route::Dashboard {}, class: "btn btn-outline w-fit",
                        "Back to my trips"
                    }
                }
                match trip() {
                    Some(trip) => rsx!(
                        div { class: "flex flex-col gap-1",
                            h1 { class: "text-3xl font-semibold", "{trip.title}" }
                            p { class: "opacity-70",
                                "{trip.num_days} day itinerary"
                            }
                            if let Some(preferences) = trip.preferences.as_ref() {
                                p { class: "text-sm", "Preferences: {preferences}" }
                            }
                        }
                        for day in days {
                            DayCard {
                                key: "{day.day_number}",
                                control: surface.control(day.day_number),
                                highlighted: surface.is_highlighted(day.day_number),
                                day: day.clone(),
                                on_regenerate,
                            }
                        }
                    ),
                    None if error().is_none() => rsx!(
                        div { class: "skeleton h-10 w-64" }
                        div { class: "skeleton h-32 w-full" }
                    ),
                    None => rsx!(),
                }
            }
        }
    )
}
