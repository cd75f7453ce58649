use crate::image_source::interface::{
    ImageOrigin, ImagePicker, PickerOptions, PickerResponse, SelectedImage,
};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Selected(SelectedImage),
    Cancelled,
}

/// Turns camera and gallery picks into a single [`Selection`].
#[derive(Clone)]
pub struct ImageSource {
    picker: Arc<dyn ImagePicker + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
    options: PickerOptions,
}

impl ImageSource {
    pub fn new(
        picker: Arc<dyn ImagePicker + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            picker,
            logger: logger.with_namespace("image_source"),
            options: PickerOptions::default(),
        }
    }

    pub fn capture_from_camera(&self) -> Selection {
        let response = self.picker.launch_camera(&self.options);
        self.selection_from(response, ImageOrigin::Camera)
    }

    pub fn select_from_gallery(&self) -> Selection {
        let response = self.picker.launch_gallery(&self.options);
        self.selection_from(response, ImageOrigin::Gallery)
    }

    fn selection_from(
        &self,
        response: Result<PickerResponse, Box<dyn std::error::Error + Send + Sync>>,
        origin: ImageOrigin,
    ) -> Selection {
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                let _ = self.logger.error(&format!("Picker failed: {}", e));
                return Selection::Cancelled;
            }
        };

        let Some(uri) = response.first_uri() else {
            let _ = self.logger.info("Picker cancelled");
            return Selection::Cancelled;
        };

        match SelectedImage::from_uri(uri, origin) {
            Ok(image) => {
                let _ = self.logger.info(&format!(
                    "Selected {:?} from {:?} ({}, {} bytes)",
                    image.path, image.origin, image.mime_type, image.size_bytes
                ));
                Selection::Selected(image)
            }
            Err(e) => {
                let _ = self.logger.error(&format!("Ignoring picked image: {}", e));
                Selection::Cancelled
            }
        }
    }
}
