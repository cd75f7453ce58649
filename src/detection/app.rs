use crate::detection::core::{init, transition, Effect, Event, Session};
use crate::detection::render::Render;
use crate::detection::run_effect::RunEffect;
use crate::device_display::interface::DeviceDisplay;
use crate::image_source::adapter::ImageSource;
use crate::knowledge_base::interface::KnowledgeBase;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use crate::prediction_client::interface::PredictionClient;
use crate::user_input::interface::UserInput;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct DetectionApp {
    logger: Arc<dyn Logger + Send + Sync>,
    knowledge_base: Arc<dyn KnowledgeBase + Send + Sync>,
    render: Render,
    run_effect: RunEffect,
}

impl DetectionApp {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        knowledge_base: Arc<dyn KnowledgeBase + Send + Sync>,
        user_input: Arc<dyn UserInput + Send + Sync>,
        image_source: ImageSource,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    ) -> Self {
        Self {
            run_effect: RunEffect::new(
                logger.clone(),
                user_input,
                image_source,
                prediction_client,
            ),
            render: Render::new(device_display),
            logger: logger.with_namespace("detection"),
            knowledge_base,
        }
    }

    /// Drives the session until input closes and nothing is in flight.
    pub fn run(&self) -> Result<Session, Box<dyn std::error::Error + Send + Sync>> {
        let transition_logger = self.logger.clone();
        let knowledge_base = self.knowledge_base.clone();
        let render = self.render.clone();
        let render_logger = self.logger.clone();
        let run_effect = self.run_effect.clone();

        let state_machine = StateMachine::new(
            init(),
            move |session: Session, event: Event| {
                let _ = transition_logger.info(&format!(
                    "\nold session:\n\t{:?}\n\nevent:\n\t{:?}",
                    session, event
                ));
                let (new_session, effects) = transition(knowledge_base.as_ref(), session, event);
                let _ = transition_logger.info(&format!(
                    "\nnew session:\n\t{:?}\n\neffects:\n\t{:?}",
                    new_session, effects
                ));
                (new_session, effects)
            },
            move |session: &Session| {
                if let Err(e) = render.render(session) {
                    let _ = render_logger.error(&format!("Render failed: {}", e));
                }
            },
            move |effect: Effect, event_sender: Sender<Event>| {
                run_effect.run_effect(effect, event_sender)
            },
            |session: &Session| session.is_finished(),
        );

        state_machine.run()
    }
}
