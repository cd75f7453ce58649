use crate::detection::resolver::{resolve, Resolution, ResolvedDetection};
use crate::image_source::adapter::Selection;
use crate::image_source::interface::SelectedImage;
use crate::knowledge_base::interface::KnowledgeBase;
use crate::prediction_client::interface::PredictionResult;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Detection {
    #[default]
    Idle,
    Submitting {
        sequence: u64,
    },
    Resolved {
        result: PredictionResult,
        detection: ResolvedDetection,
    },
    Failed {
        result: PredictionResult,
        error_detail: String,
    },
}

/// Everything the user can see. Replaced as a whole on every transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub image: Option<SelectedImage>,
    pub detection: Detection,
    pub latest_sequence: u64,
    pub input_closed: bool,
}

impl Session {
    /// Input is gone and nothing is in flight.
    pub fn is_finished(&self) -> bool {
        self.input_closed && !matches!(self.detection, Detection::Submitting { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ImageSelected(Selection),
    PredictionDone {
        sequence: u64,
        result: PredictionResult,
    },
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubscribeToUserInput,
    SubmitImage { sequence: u64, image: SelectedImage },
}

pub fn init() -> (Session, Vec<Effect>) {
    (Session::default(), vec![Effect::SubscribeToUserInput])
}

pub fn transition(
    knowledge_base: &dyn KnowledgeBase,
    session: Session,
    event: Event,
) -> (Session, Vec<Effect>) {
    match (session.detection.clone(), event) {
        (_, Event::ImageSelected(Selection::Cancelled)) => (session, vec![]),

        (_, Event::ImageSelected(Selection::Selected(image))) => {
            let sequence = session.latest_sequence + 1;

            // whatever was shown belongs to the previous image
            let cleared = Session {
                image: Some(image.clone()),
                detection: Detection::Idle,
                latest_sequence: sequence,
                ..session
            };

            (
                Session {
                    detection: Detection::Submitting { sequence },
                    ..cleared
                },
                vec![Effect::SubmitImage { sequence, image }],
            )
        }

        (
            Detection::Submitting { sequence: expected },
            Event::PredictionDone { sequence, result },
        ) if sequence == expected => {
            let detection = match resolve(knowledge_base, &result) {
                Resolution::Detected(detection) => Detection::Resolved { result, detection },
                Resolution::Failed { error_detail } => Detection::Failed {
                    result,
                    error_detail,
                },
            };

            (
                Session {
                    detection,
                    ..session
                },
                vec![],
            )
        }

        // superseded by a newer selection
        (_, Event::PredictionDone { .. }) => (session, vec![]),

        (_, Event::InputClosed) => (
            Session {
                input_closed: true,
                ..session
            },
            vec![],
        ),
    }
}
