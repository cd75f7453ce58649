use std::error::Error;

/// A text surface the session is rendered onto, one frame at a time.
pub trait DeviceDisplay: Send + Sync {
    /// Replace whatever is shown with `lines`.
    fn show(&mut self, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Characters per line before wrapping.
    fn chars_per_line(&self) -> usize {
        72
    }
}
