use crate::device_display::interface::DeviceDisplay;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Keeps every frame it is shown.
#[derive(Clone, Default)]
pub struct DeviceDisplayFake {
    frames: Arc<Mutex<Vec<Vec<String>>>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<Vec<String>> {
        self.frames
            .lock()
            .map(|frames| frames.clone())
            .unwrap_or_default()
    }

    pub fn last_frame(&self) -> Vec<String> {
        self.frames().pop().unwrap_or_default()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn show(&mut self, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.frames
            .lock()
            .map_err(|_| "display frames lock poisoned")?
            .push(lines.to_vec());
        Ok(())
    }
}
