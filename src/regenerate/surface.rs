/// Rendering sink the regeneration flow writes to.
///
/// Controls and content elements are addressed by day number. Methods take `&self`; the
/// browser implementation writes through signals and the test fakes through `RefCell`s.
pub trait DaySurface {
    /// Current label of the day's regenerate control.
    fn control_label(&self, day: i32) -> String;

    fn set_control_label(&self, day: i32, label: &str);

    fn set_control_enabled(&self, day: i32, enabled: bool);

    /// Whether the day's content element exists.
    fn contains_day(&self, day: i32) -> bool;

    /// Replace the day's content with `content` as plain text.
    fn render_day_update(&self, day: i32, content: &str);

    /// Highlight the day's block for `duration_ms` and scroll it into view.
    fn highlight_day(&self, day: i32, duration_ms: u32);

    /// Show a transient notification for `display_ms`, then animate it out over `exit_ms`.
    fn notify(&self, message: &str, display_ms: u32, exit_ms: u32);

    /// Blocking error message.
    fn alert(&self, message: &str);
}
