use voyager::model::user::UserDto;

/// Session level state shared through context as `Signal<UserState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    /// Logged in user, `None` when logged out or not fetched yet
    pub user: Option<UserDto>,
    /// Whether the initial user lookup has finished
    pub fetched: bool,
    /// CSRF token read once at start-up and sent on mutating requests
    pub csrf_token: Option<String>,
}

impl UserState {
    pub fn csrf_token(&self) -> &str {
        self.csrf_token.as_deref().unwrap_or_default()
    }
}
