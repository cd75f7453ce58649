use crate::detection::core::{Detection, Session};
use crate::device_display::interface::DeviceDisplay;
use std::sync::{Arc, Mutex};

pub const FAILURE_MESSAGE: &str = "Failed to get prediction. Please try again.";

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self { device_display }
    }

    pub fn render(&self, session: &Session) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self
            .device_display
            .lock()
            .map_err(|_| "display lock poisoned")?;

        device_display.show(&render_lines(session))
    }
}

pub fn render_lines(session: &Session) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(image) = &session.image {
        lines.push(format!("Image: {}", image.path.display()));
    }

    match &session.detection {
        Detection::Idle => {
            if session.image.is_none() {
                lines.push("Capture from Camera or Select from Gallery".to_string());
            }
        }
        Detection::Submitting { .. } => {
            lines.push("Detecting machine...".to_string());
        }
        Detection::Resolved { detection, .. } => {
            lines.push(format!("Detected Machine: {}", detection.display_label));

            if let Some(entry) = &detection.entry {
                lines.push(format!("Description: {}", entry.description));
                lines.push(format!("Target Muscle: {}", entry.category));

                lines.push("Famous Exercises:".to_string());
                for exercise in &entry.exercises {
                    lines.push(format!("  - {}", exercise));
                }

                if !entry.references.is_empty() {
                    lines.push("YouTube Tutorials:".to_string());
                    for link in &entry.references {
                        lines.push(format!("  {}", link));
                    }
                }
            }
        }
        Detection::Failed { error_detail, .. } => {
            lines.push(FAILURE_MESSAGE.to_string());
            lines.push(format!("({})", error_detail));
        }
    }

    lines
}
