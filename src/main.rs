use config::Config;
use detection::app::DetectionApp;
use device_display::impl_console::DeviceDisplayConsole;
use image_source::adapter::ImageSource;
use image_source::impl_console::ImagePickerConsole;
use knowledge_base::impl_static::KnowledgeBaseStatic;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use prediction_client::impl_fake::PredictionClientFake;
use prediction_client::impl_http::PredictionClientHttp;
use prediction_client::interface::PredictionClient;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use user_input::impl_console::UserInputConsole;

mod config;
mod detection;
mod device_display;
mod image_source;
mod knowledge_base;
mod library;
mod prediction_client;
mod user_input;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let knowledge_base = match &config.knowledge_base_path {
        Some(path) => KnowledgeBaseStatic::from_path(path)?,
        None => KnowledgeBaseStatic::builtin()?,
    };
    logger.info(&format!(
        "Loaded knowledge base v{} with {} machines",
        knowledge_base.version(),
        knowledge_base.len()
    ))?;

    let prediction_client: Arc<dyn PredictionClient + Send + Sync> = if config.use_fake_predictor {
        let mut labels = knowledge_base.labels();
        labels.push("rowing machine".to_string());
        Arc::new(PredictionClientFake::random(
            labels,
            Duration::from_millis(500),
            logger.clone(),
        ))
    } else {
        logger.info(&format!("Predicting with {}", config.predict_url()?))?;
        Arc::new(PredictionClientHttp::new(&config, logger.clone())?)
    };

    let image_source = ImageSource::new(Arc::new(ImagePickerConsole::new()), logger.clone());

    let app = DetectionApp::new(
        logger.clone(),
        Arc::new(knowledge_base),
        Arc::new(UserInputConsole::new()),
        image_source,
        prediction_client,
        Arc::new(Mutex::new(DeviceDisplayConsole::new())),
    );

    app.run()?;

    logger.info("Bye")?;

    Ok(())
}
