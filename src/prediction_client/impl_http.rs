use crate::config::Config;
use crate::image_source::interface::SelectedImage;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{
    PredictionClient, PredictionError, PredictionResult, UNKNOWN_LABEL,
};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::sync::Arc;
use url::Url;

const FIELD_NAME: &str = "file";
const FILE_NAME: &str = "image.jpg";
const CONTENT_TYPE: &str = "image/jpeg";

/// Posts the image as `multipart/form-data` to `{base}/predict/`.
pub struct PredictionClientHttp {
    client: Client,
    predict_url: Url,
    max_upload_bytes: u64,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientHttp {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let predict_url = config.predict_url()?;
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            predict_url,
            max_upload_bytes: config.max_upload_bytes,
            logger: logger.with_namespace("prediction_client").with_namespace("http"),
        })
    }

    fn post(&self, image: &SelectedImage) -> Result<String, PredictionError> {
        if image.size_bytes > self.max_upload_bytes {
            return Err(PredictionError::ImageTooLarge {
                size: image.size_bytes,
                limit: self.max_upload_bytes,
            });
        }

        // the file can change between selection and upload
        let bytes = std::fs::read(&image.path)?;
        if bytes.len() as u64 > self.max_upload_bytes {
            return Err(PredictionError::ImageTooLarge {
                size: bytes.len() as u64,
                limit: self.max_upload_bytes,
            });
        }

        let _ = self.logger.info(&format!(
            "Posting {} bytes to {}",
            bytes.len(),
            self.predict_url
        ));

        let part = Part::bytes(bytes)
            .file_name(FILE_NAME)
            .mime_str(CONTENT_TYPE)
            .map_err(from_reqwest)?;
        let form = Form::new().part(FIELD_NAME, part);

        let response = self
            .client
            .post(self.predict_url.clone())
            .multipart(form)
            .send()
            .map_err(from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status.as_u16()));
        }

        let body = response.text().map_err(from_reqwest)?;

        parse_prediction_body(&body)
    }
}

impl PredictionClient for PredictionClientHttp {
    fn submit(&self, image: &SelectedImage) -> PredictionResult {
        let result = self.post(image);

        match &result {
            Ok(label) => {
                let _ = self.logger.info(&format!("Detected machine: {:?}", label));
            }
            Err(e) => {
                let _ = self.logger.error(&format!("Prediction failed: {}", e));
            }
        }

        result.into()
    }
}

fn from_reqwest(error: reqwest::Error) -> PredictionError {
    if error.is_timeout() {
        PredictionError::Timeout
    } else {
        PredictionError::Transport(error.to_string())
    }
}

/// Extracts `detected_machine` from a success body. A missing, null or
/// empty value yields [`UNKNOWN_LABEL`]; any other non-string is an error.
pub fn parse_prediction_body(body: &str) -> Result<String, PredictionError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let object = value.as_object().ok_or(PredictionError::NotAnObject)?;

    match object.get("detected_machine") {
        None | Some(serde_json::Value::Null) => Ok(UNKNOWN_LABEL.to_string()),
        Some(serde_json::Value::String(label)) if label.is_empty() => {
            Ok(UNKNOWN_LABEL.to_string())
        }
        Some(serde_json::Value::String(label)) => Ok(label.clone()),
        Some(other) => Err(PredictionError::LabelNotAString(other.to_string())),
    }
}
