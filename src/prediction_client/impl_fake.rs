use crate::image_source::interface::SelectedImage;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{PredictionClient, PredictionResult};
use rand::distr::{Distribution, Uniform};
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

enum Behavior {
    Random {
        labels: Vec<String>,
        latency: Duration,
    },
    #[cfg(test)]
    ByPath(HashMap<PathBuf, (Duration, PredictionResult)>),
}

pub struct PredictionClientFake {
    behavior: Behavior,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientFake {
    /// Answers with a random label from `labels` after `latency`.
    pub fn random(
        labels: Vec<String>,
        latency: Duration,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            behavior: Behavior::Random { labels, latency },
            logger: logger.with_namespace("prediction_client").with_namespace("fake"),
        }
    }

    /// Answers each image path with its scripted result after its delay.
    #[cfg(test)]
    pub fn by_path(
        script: Vec<(PathBuf, Duration, PredictionResult)>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let script = script
            .into_iter()
            .map(|(path, delay, result)| (path, (delay, result)))
            .collect();

        Self {
            behavior: Behavior::ByPath(script),
            logger: logger.with_namespace("prediction_client").with_namespace("fake"),
        }
    }
}

impl PredictionClient for PredictionClientFake {
    fn submit(&self, image: &SelectedImage) -> PredictionResult {
        let _ = self
            .logger
            .info(&format!("Predicting {:?} with fake client...", image.path));

        match &self.behavior {
            Behavior::Random { labels, latency } => {
                std::thread::sleep(*latency);

                let index_dist = match Uniform::new(0, labels.len()) {
                    Ok(dist) => dist,
                    Err(e) => return PredictionResult::failure(&e.to_string()),
                };
                let mut rng = rand::rng();

                PredictionResult::success(&labels[index_dist.sample(&mut rng)])
            }
            #[cfg(test)]
            Behavior::ByPath(script) => match script.get(&image.path) {
                Some((delay, result)) => {
                    std::thread::sleep(*delay);
                    result.clone()
                }
                None => PredictionResult::failure("no scripted prediction for this image"),
            },
        }
    }
}
