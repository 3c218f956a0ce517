//! Browser bindings for the day regeneration flow.
//!
//! [`SignalSurface`] renders the flow's effects through Dioxus signals read by the itinerary
//! page. [`ReqwasmTransport`] posts to the regeneration endpoint.

use std::collections::{HashMap, HashSet};

use dioxus::prelude::*;
use voyager::{model::trip::ItineraryDayDto, regenerate::DaySurface};

/// Label of an idle regenerate control.
pub const DEFAULT_CONTROL_LABEL: &str = "Regenerate";

#[derive(Clone, Debug, PartialEq)]
pub struct ControlState {
    pub label: String,
    pub enabled: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            label: DEFAULT_CONTROL_LABEL.to_string(),
            enabled: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastState {
    pub id: u32,
    pub message: String,
    /// Set while the exit animation plays
    pub leaving: bool,
}

/// Per day highlight generations.
///
/// Each highlight takes a new generation; its timer only clears the highlight while that
/// generation is still the latest for the day.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightGenerations(HashMap<i32, u32>);

impl HighlightGenerations {
    pub fn begin(&mut self, day: i32) -> u32 {
        let generation = self.0.entry(day).or_default();
        *generation = generation.wrapping_add(1);
        *generation
    }

    pub fn is_current(&self, day: i32, generation: u32) -> bool {
        self.0.get(&day) == Some(&generation)
    }
}

/// Signal backed page state for one itinerary.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalSurface {
    pub days: Signal<Vec<ItineraryDayDto>>,
    pub controls: Signal<HashMap<i32, ControlState>>,
    pub highlighted: Signal<HashSet<i32>>,
    pub toast: Signal<Option<ToastState>>,
    toast_seq: Signal<u32>,
    highlight_generations: Signal<HighlightGenerations>,
}

impl SignalSurface {
    /// Create the surface's signals in the current component scope.
    pub fn new() -> Self {
        Self {
            days: Signal::new(Vec::new()),
            controls: Signal::new(HashMap::new()),
            highlighted: Signal::new(HashSet::new()),
            toast: Signal::new(None),
            toast_seq: Signal::new(0),
            highlight_generations: Signal::new(HighlightGenerations::default()),
        }
    }

    pub fn set_days(&self, days: Vec<ItineraryDayDto>) {
        let mut signal = self.days;
        signal.set(days);
    }

    pub fn control(&self, day: i32) -> ControlState {
        self.controls.read().get(&day).cloned().unwrap_or_default()
    }

    pub fn is_highlighted(&self, day: i32) -> bool {
        self.highlighted.read().contains(&day)
    }
}

async fn sleep(ms: u32) {
    #[cfg(feature = "web")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(feature = "web"))]
    let _ = ms;
}

impl DaySurface for SignalSurface {
    fn control_label(&self, day: i32) -> String {
        self.control(day).label
    }

    fn set_control_label(&self, day: i32, label: &str) {
        let mut controls = self.controls;
        controls.write().entry(day).or_default().label = label.to_string();
    }

    fn set_control_enabled(&self, day: i32, enabled: bool) {
        let mut controls = self.controls;
        controls.write().entry(day).or_default().enabled = enabled;
    }

    fn contains_day(&self, day: i32) -> bool {
        self.days.read().iter().any(|d| d.day_number == day)
    }

    fn render_day_update(&self, day: i32, content: &str) {
        let mut days = self.days;
        if let Some(entry) = days.write().iter_mut().find(|d| d.day_number == day) {
            entry.content = content.to_string();
        };
    }

    fn highlight_day(&self, day: i32, duration_ms: u32) {
        let mut highlighted = self.highlighted;
        let mut generations = self.highlight_generations;
        let generation = generations.write().begin(day);
        highlighted.write().insert(day);

        document::eval(&format!(
            "document.getElementById('day-{}')?.scrollIntoView({{ behavior: 'smooth', block: 'nearest' }});",
            day
        ));

        // A later highlight of the same day owns the removal
        spawn(async move {
            sleep(duration_ms).await;
            if generations.peek().is_current(day, generation) {
                highlighted.write().remove(&day);
            }
        });
    }

    fn notify(&self, message: &str, display_ms: u32, exit_ms: u32) {
        let mut toast = self.toast;
        let mut toast_seq = self.toast_seq;

        let id = *toast_seq.peek() + 1;
        toast_seq.set(id);
        toast.set(Some(ToastState {
            id,
            message: message.to_string(),
            leaving: false,
        }));

        // A newer notification replaces this one, leave it alone then
        spawn(async move {
            sleep(display_ms).await;
            if let Some(current) = toast.write().as_mut().filter(|t| t.id == id) {
                current.leaving = true;
            }

            sleep(exit_ms).await;
            if toast.peek().as_ref().is_some_and(|t| t.id == id) {
                toast.set(None);
            }
        });
    }

    fn alert(&self, message: &str) {
        let message = serde_json::to_string(message).unwrap_or_default();
        document::eval(&format!("alert({});", message));
    }
}

#[cfg(feature = "web")]
pub use web::{activate_day, use_regenerator, ReqwasmTransport, SharedRegenerator};

#[cfg(feature = "web")]
mod web {
    use std::rc::Rc;

    use dioxus::prelude::*;
    use reqwasm::http::{Request, RequestCredentials};
    use voyager::{
        model::api::CSRF_HEADER,
        regenerate::{
            config::regenerate_path, RegenerateTransport, Regenerator, TransportResponse,
        },
    };

    use super::SignalSurface;
    use crate::client::store::user::UserState;

    pub struct ReqwasmTransport;

    impl RegenerateTransport for ReqwasmTransport {
        async fn post_regenerate(
            &self,
            trip_id: i32,
            day: i32,
            csrf_token: &str,
        ) -> Result<TransportResponse, String> {
            let response = Request::post(&regenerate_path(trip_id, day))
                .header("Content-Type", "application/json")
                .header(CSRF_HEADER, csrf_token)
                .body("{}")
                .credentials(RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| e.to_string())?;

            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            Ok(TransportResponse { status, body })
        }
    }

    pub type SharedRegenerator = Signal<Option<Rc<Regenerator<ReqwasmTransport, SignalSurface>>>>;

    /// Set up regeneration for the page once the CSRF token is known.
    ///
    /// Stays `None` while no token is available, leaving the controls without effect.
    pub fn use_regenerator(surface: SignalSurface) -> SharedRegenerator {
        let user_state = use_context::<Signal<UserState>>();
        let mut regenerator: SharedRegenerator = use_signal(|| None);

        use_effect(move || {
            let state = user_state.read();
            if regenerator.peek().is_some() || !state.fetched {
                return;
            }

            regenerator.set(
                Regenerator::setup(state.csrf_token.as_deref(), ReqwasmTransport, surface)
                    .map(Rc::new),
            );
        });

        regenerator
    }

    /// Run the flow for one activated control.
    pub fn activate_day(regenerator: SharedRegenerator, trip_id: i32, day_attr: String) {
        let Some(regenerator) = regenerator.read().clone() else {
            return;
        };

        spawn(async move {
            regenerator.activate(Some(trip_id), Some(&day_attr)).await;
        });
    }
}
