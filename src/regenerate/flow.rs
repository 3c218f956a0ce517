use std::{cell::RefCell, collections::HashSet};

use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    model::api::ErrorDto,
    regenerate::{
        config::{
            HIGHLIGHT_DURATION_MS, LOADING_LABEL, NOTIFICATION_DISPLAY_MS, NOTIFICATION_EXIT_MS,
        },
        DaySurface, RegenerateConfig, RegenerateError, RegenerateTransport, TransportResponse,
    },
};

/// Result of activating a regenerate control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegenerateOutcome {
    /// The day's content was replaced.
    Updated { day: i32, content: String },
    /// Nothing was updated; the user was alerted.
    Failed(RegenerateError),
    /// A request for this day was already outstanding, the activation was dropped.
    AlreadyRequesting(i32),
}

/// Drives the regeneration state machine for every control on one itinerary page.
pub struct Regenerator<T, S> {
    config: RegenerateConfig,
    transport: T,
    surface: S,
    in_flight: RefCell<HashSet<i32>>,
}

impl<T: RegenerateTransport, S: DaySurface> Regenerator<T, S> {
    pub fn new(config: RegenerateConfig, transport: T, surface: S) -> Self {
        Self {
            config,
            transport,
            surface,
            in_flight: RefCell::new(HashSet::new()),
        }
    }

    /// Set up regeneration for a page.
    ///
    /// Returns `None` when the CSRF token is missing, leaving the page without any
    /// regeneration handlers.
    pub fn setup(csrf_token: Option<&str>, transport: T, surface: S) -> Option<Self> {
        RegenerateConfig::from_token(csrf_token)
            .map(|config| Self::new(config, transport, surface))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether a request for `day` is outstanding.
    pub fn is_requesting(&self, day: i32) -> bool {
        self.in_flight.borrow().contains(&day)
    }

    /// Handle activation of a day's regenerate control.
    ///
    /// # Arguments
    /// - `trip_id` - Page level trip identifier, if the page carries one
    /// - `day_attr` - Raw day number attribute of the activated control
    ///
    /// # Returns
    /// - `RegenerateOutcome::Updated` - The day's content was replaced
    /// - `RegenerateOutcome::Failed` - Input, transport or page error; the user was alerted
    /// - `RegenerateOutcome::AlreadyRequesting` - The control already has a request outstanding
    pub async fn activate(
        &self,
        trip_id: Option<i32>,
        day_attr: Option<&str>,
    ) -> RegenerateOutcome {
        let (trip_id, day) = match parse_input(trip_id, day_attr) {
            Ok(input) => input,
            Err(err) => {
                tracing::warn!("Regeneration aborted before request: {}", err);
                self.surface
                    .alert(&format!("Unable to regenerate this day: {}.", err));

                return RegenerateOutcome::Failed(err);
            }
        };

        let Some(_guard) = ControlGuard::engage(&self.surface, &self.in_flight, day) else {
            tracing::debug!("Day {} already has a regeneration in progress", day);

            return RegenerateOutcome::AlreadyRequesting(day);
        };

        match self.request(trip_id, day).await.and_then(|content| {
            self.apply(day, &content)?;
            Ok(content)
        }) {
            Ok(content) => RegenerateOutcome::Updated { day, content },
            Err(err) => {
                tracing::error!(
                    trip_id = %trip_id,
                    day = %day,
                    "Failed to regenerate day: {}",
                    err
                );
                self.surface.alert(&format!(
                    "Failed to regenerate Day {}: {}. Please try again.",
                    day, err
                ));

                RegenerateOutcome::Failed(err)
            }
        }
    }

    async fn request(&self, trip_id: i32, day: i32) -> Result<String, RegenerateError> {
        let response = self
            .transport
            .post_regenerate(trip_id, day, self.config.csrf_token())
            .await
            .map_err(RegenerateError::Network)?;

        parse_response(day, &response)
    }

    fn apply(&self, day: i32, content: &str) -> Result<(), RegenerateError> {
        if !self.surface.contains_day(day) {
            return Err(RegenerateError::MissingContentElement(day));
        }

        self.surface.render_day_update(day, content);
        self.surface.highlight_day(day, HIGHLIGHT_DURATION_MS);
        self.surface.notify(
            &format!("Day {} regenerated successfully!", day),
            NOTIFICATION_DISPLAY_MS,
            NOTIFICATION_EXIT_MS,
        );

        Ok(())
    }
}

/// Disables a control and shows the loading label for as long as it lives.
///
/// Dropping the guard restores the saved label, re-enables the control and clears the
/// in-flight marker, on success and failure alike.
struct ControlGuard<'a, S: DaySurface> {
    surface: &'a S,
    in_flight: &'a RefCell<HashSet<i32>>,
    day: i32,
    label: String,
}

impl<'a, S: DaySurface> ControlGuard<'a, S> {
    fn engage(surface: &'a S, in_flight: &'a RefCell<HashSet<i32>>, day: i32) -> Option<Self> {
        if !in_flight.borrow_mut().insert(day) {
            return None;
        }

        let label = surface.control_label(day);
        surface.set_control_enabled(day, false);
        surface.set_control_label(day, LOADING_LABEL);

        Some(Self {
            surface,
            in_flight,
            day,
            label,
        })
    }
}

impl<S: DaySurface> Drop for ControlGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_control_label(self.day, &self.label);
        self.surface.set_control_enabled(self.day, true);
        self.in_flight.borrow_mut().remove(&self.day);
    }
}

fn parse_input(
    trip_id: Option<i32>,
    day_attr: Option<&str>,
) -> Result<(i32, i32), RegenerateError> {
    let raw = day_attr
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or(RegenerateError::MissingDayNumber)?;

    let day = match raw.parse::<i32>() {
        Ok(day) if day >= 1 => day,
        _ => return Err(RegenerateError::InvalidDayNumber(raw.to_string())),
    };

    let trip_id = trip_id.ok_or(RegenerateError::MissingTripId)?;

    Ok((trip_id, day))
}

/// Decode the endpoint reply into the new content for `day`.
///
/// A `day` field that disagrees with the requested day only logs a warning; the content is
/// still applied to the requested day.
fn parse_response(day: i32, response: &TransportResponse) -> Result<String, RegenerateError> {
    if !response.is_success() {
        let message = serde_json::from_str::<ErrorDto>(&response.body)
            .map(|dto| dto.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status));

        return Err(RegenerateError::Status {
            status: response.status,
            message,
        });
    }

    let body: Value = serde_json::from_str(&response.body)
        .map_err(|e| RegenerateError::MalformedResponse(e.to_string()))?;

    let content = match body.get("content") {
        Some(Value::String(content)) if !content.is_empty() => content.clone(),
        _ => return Err(RegenerateError::EmptyContent),
    };

    if let Some(reported) = body.get("day") {
        let reported_day = match reported {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        if reported_day != Some(i64::from(day)) {
            tracing::warn!(
                "Regenerated day mismatch: requested {}, response reported {}",
                day,
                reported
            );
        }
    }

    Ok(content)
}
