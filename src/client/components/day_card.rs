use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRotate;
use dioxus_free_icons::Icon;
use voyager::model::trip::ItineraryDayDto;

use crate::client::util::regenerate::ControlState;

/// One day block of an itinerary with its regenerate control.
///
/// The block is addressable as `day-{n}` and the control carries the day in `data-day`.
#[component]
pub fn DayCard(
    day: ItineraryDayDto,
    control: ControlState,
    highlighted: bool,
    on_regenerate: EventHandler<String>,
) -> Element {
    let ring = if highlighted {
        "ring-4 ring-success bg-success/10"
    } else {
        ""
    };
    let day_number = day.day_number;

    rsx!(
        div {
            id: "day-{day.day_number}",
            class: "card bg-base-100 shadow-sm transition-all duration-500 {ring}",
            "data-day": "{day.day_number}",
            div { class: "card-body",
                div { class: "flex items-center justify-between gap-2",
                    h3 { class: "card-title",
                        "Day {day.day_number}"
                    }
                    button {
                        class: "btn btn-sm btn-outline flex gap-2",
                        "data-day": "{day_number}",
                        disabled: !control.enabled,
                        onclick: move |_| on_regenerate.call(day_number.to_string()),
                        Icon {
                            width: 14,
                            height: 14,
                            icon: FaRotate
                        }
                        span { "{control.label}" }
                    }
                }
                p { class: "whitespace-pre-line day-content",
                    "{day.content}"
                }
            }
        }
    )
}
