use crate::image_source::interface::{ImagePicker, PickerOptions, PickerResponse};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Hands out scripted responses in order, for camera and gallery alike.
pub struct ImagePickerFake {
    responses: Mutex<VecDeque<PickerResponse>>,
    launched: Mutex<Vec<PickerOptions>>,
}

impl ImagePickerFake {
    pub fn new(responses: Vec<PickerResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            launched: Mutex::new(Vec::new()),
        }
    }

    pub fn launched_options(&self) -> Vec<PickerOptions> {
        self.launched
            .lock()
            .map(|launched| launched.clone())
            .unwrap_or_default()
    }

    fn next(
        &self,
        options: &PickerOptions,
    ) -> Result<PickerResponse, Box<dyn std::error::Error + Send + Sync>> {
        if let Ok(mut launched) = self.launched.lock() {
            launched.push(options.clone());
        }

        let mut responses = self
            .responses
            .lock()
            .map_err(|_| "picker script lock poisoned")?;

        responses
            .pop_front()
            .ok_or_else(|| "no scripted picker response left".into())
    }
}

impl ImagePicker for ImagePickerFake {
    fn launch_camera(
        &self,
        options: &PickerOptions,
    ) -> Result<PickerResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.next(options)
    }

    fn launch_gallery(
        &self,
        options: &PickerOptions,
    ) -> Result<PickerResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.next(options)
    }
}
