#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CaptureFromCamera,
    SelectFromGallery,
    Quit,
}

pub trait UserInput {
    /// Blocks until the next command. `None` once input is exhausted.
    fn next_command(&self) -> Result<Option<Command>, Box<dyn std::error::Error + Send + Sync>>;
}
