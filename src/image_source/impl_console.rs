use crate::image_source::interface::{ImagePicker, PickerOptions, PickerResponse};
use std::io::{BufRead, Write};

/// Stands in for the camera and gallery pickers by asking for a path on
/// stdin. An empty answer cancels. Cropping is left to the user's tools.
pub struct ImagePickerConsole {}

impl ImagePickerConsole {
    pub fn new() -> Self {
        Self {}
    }

    fn prompt(
        &self,
        what: &str,
        options: &PickerOptions,
    ) -> Result<PickerResponse, Box<dyn std::error::Error + Send + Sync>> {
        let mut stdout = std::io::stdout();
        let crop = if options.allows_editing {
            format!("crop to {}:{}, ", options.aspect.0, options.aspect.1)
        } else {
            String::new()
        };
        write!(
            stdout,
            "{} image path ({}quality {:.0}%, empty to cancel): ",
            what,
            crop,
            options.quality * 100.0
        )?;
        stdout.flush()?;

        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;

        Ok(parse_answer(read, &line))
    }
}

fn parse_answer(read: usize, line: &str) -> PickerResponse {
    let path = line.trim().trim_matches(|c| c == '"' || c == '\'');

    if read == 0 || path.is_empty() {
        PickerResponse::canceled()
    } else {
        PickerResponse::picked(path)
    }
}

impl ImagePicker for ImagePickerConsole {
    fn launch_camera(
        &self,
        options: &PickerOptions,
    ) -> Result<PickerResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.prompt("Camera", options)
    }

    fn launch_gallery(
        &self,
        options: &PickerOptions,
    ) -> Result<PickerResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.prompt("Gallery", options)
    }
}
