use crate::detection::core::{Effect, Event};
use crate::image_source::adapter::ImageSource;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::PredictionClient;
use crate::user_input::interface::{Command, UserInput};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    user_input: Arc<dyn UserInput + Send + Sync>,
    image_source: ImageSource,
    prediction_client: Arc<dyn PredictionClient + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        user_input: Arc<dyn UserInput + Send + Sync>,
        image_source: ImageSource,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("effect"),
            user_input,
            image_source,
            prediction_client,
        }
    }

    pub fn run_effect(&self, effect: Effect, event_sender: Sender<Event>) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeToUserInput => loop {
                let selection = match self.user_input.next_command() {
                    Ok(Some(Command::CaptureFromCamera)) => self.image_source.capture_from_camera(),
                    Ok(Some(Command::SelectFromGallery)) => self.image_source.select_from_gallery(),
                    Ok(Some(Command::Quit)) | Ok(None) => {
                        let _ = event_sender.send(Event::InputClosed);
                        return;
                    }
                    Err(e) => {
                        let _ = self.logger.error(&format!("Reading input failed: {}", e));
                        let _ = event_sender.send(Event::InputClosed);
                        return;
                    }
                };

                if event_sender.send(Event::ImageSelected(selection)).is_err() {
                    return;
                }
            },
            Effect::SubmitImage { sequence, image } => {
                let result = self.prediction_client.submit(&image);
                let _ = event_sender.send(Event::PredictionDone { sequence, result });
            }
        }
    }
}
