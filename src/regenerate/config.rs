use dioxus_logger::tracing;

/// How long a regenerated day stays highlighted.
pub const HIGHLIGHT_DURATION_MS: u32 = 2000;
/// How long the success notification stays on screen before it starts leaving.
pub const NOTIFICATION_DISPLAY_MS: u32 = 3000;
/// Length of the notification exit animation.
pub const NOTIFICATION_EXIT_MS: u32 = 300;
/// Label shown on a control while its request is outstanding.
pub const LOADING_LABEL: &str = "Regenerating...";

/// Immutable settings for the regeneration flow, read once when the page is set up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegenerateConfig {
    csrf_token: String,
}

impl RegenerateConfig {
    /// Build the config from the page level CSRF token.
    ///
    /// # Returns
    /// - `Some(RegenerateConfig)` - Token present and non-empty
    /// - `None` - Token missing, in which case regeneration is not wired up at all
    pub fn from_token(csrf_token: Option<&str>) -> Option<Self> {
        match csrf_token.map(str::trim) {
            Some(token) if !token.is_empty() => Some(Self {
                csrf_token: token.to_string(),
            }),
            _ => {
                tracing::debug!("CSRF token not found, day regeneration disabled");
                None
            }
        }
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }
}

/// Path of the regeneration endpoint for one day of a trip.
pub fn regenerate_path(trip_id: i32, day: i32) -> String {
    format!("/trip/{}/day/{}/regenerate", trip_id, day)
}
