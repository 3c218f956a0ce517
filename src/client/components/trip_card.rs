use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;
use voyager::model::trip::TripDto;

use crate::client::router::Route;

#[component]
pub fn TripCard(trip: TripDto, on_delete: EventHandler<i32>) -> Element {
    let trip_id = trip.id;
    let days_label = if trip.num_days == 1 { "day" } else { "days" };
    let created = trip.created_at.format("%b %-d, %Y").to_string();

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body",
                h2 { class: "card-title",
                    "{trip.title}"
                }
                p { class: "text-sm opacity-70",
                    "{trip.num_days} {days_label} · created {created}"
                }
                if let Some(preferences) = trip.preferences.as_ref() {
                    p { class: "text-sm",
                        "{preferences}"
                    }
                }
                div { class: "card-actions justify-end",
                    Link { to: Route::Itinerary { trip_id }, class: "btn btn-primary btn-sm",
                        "View"
                    }
                    button {
                        class: "btn btn-error btn-outline btn-sm flex gap-2",
                        onclick: move |_| on_delete.call(trip_id),
                        Icon {
                            width: 14,
                            height: 14,
                            icon: FaTrash
                        }
                        "Delete"
                    }
                }
            }
        }
    )
}
