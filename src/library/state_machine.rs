use std::marker::PhantomData;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

const IDLE_CHECK_INTERVAL: Duration = Duration::from_millis(50);

/// Elm style loop: one thread owns the state and applies `transition_fn` to
/// each event, effects run on their own threads and answer with events.
pub struct StateMachine<TState, TEvent, TEffect, T, R, E, D>
where
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync,
    R: Fn(&TState) + Send + Sync,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync,
    D: Fn(&TState) -> bool + Send + Sync,
{
    pub init: (TState, Vec<TEffect>),
    pub transition_fn: Arc<T>,
    pub render_fn: Arc<R>,
    pub run_effect_fn: Arc<E>,
    pub is_done_fn: Arc<D>,
    _event: PhantomData<TEvent>,
}

impl<TState, TEvent, TEffect, T, R, E, D> StateMachine<TState, TEvent, TEffect, T, R, E, D>
where
    TState: Clone + Send + 'static,
    TEvent: Send + 'static,
    TEffect: Clone + Send + 'static,
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync + 'static,
    R: Fn(&TState) + Send + Sync + 'static,
    E: Fn(TEffect, Sender<TEvent>) + Send + Sync + 'static,
    D: Fn(&TState) -> bool + Send + Sync + 'static,
{
    pub fn new(
        init: (TState, Vec<TEffect>),
        transition_fn: T,
        render_fn: R,
        run_effect_fn: E,
        is_done_fn: D,
    ) -> Self {
        Self {
            init,
            transition_fn: Arc::new(transition_fn),
            render_fn: Arc::new(render_fn),
            run_effect_fn: Arc::new(run_effect_fn),
            is_done_fn: Arc::new(is_done_fn),
            _event: PhantomData,
        }
    }

    /// Runs until `is_done_fn` holds and returns the final state. Fails if
    /// no effect is left running and no event is pending before that, e.g.
    /// after an effect thread panicked.
    pub fn run(&self) -> Result<TState, Box<dyn std::error::Error + Send + Sync>> {
        let (event_sender, event_receiver) = channel();
        let running = Arc::new(());
        let (mut state, effects) = self.init.clone();

        (self.render_fn)(&state);
        self.spawn_effects(effects, &event_sender, &running);

        while !(self.is_done_fn)(&state) {
            let event = next_event(&event_receiver, &running)?;
            let (new_state, new_effects) = (self.transition_fn)(state, event);
            state = new_state;

            (self.render_fn)(&state);
            self.spawn_effects(new_effects, &event_sender, &running);
        }

        Ok(state)
    }

    fn spawn_effects(
        &self,
        effects: Vec<TEffect>,
        event_sender: &Sender<TEvent>,
        running: &Arc<()>,
    ) {
        for effect in effects {
            let effect_sender = event_sender.clone();
            let run_effect_fn = Arc::clone(&self.run_effect_fn);
            let running = Arc::clone(running);
            std::thread::spawn(move || {
                // dropped after the effect returns or unwinds
                let _running = running;
                run_effect_fn(effect, effect_sender);
            });
        }
    }
}

/// `running` holds one extra reference per live effect thread. Events are
/// sent before that reference drops, so once only ours is left a final
/// `try_recv` sees everything that will ever arrive.
fn next_event<TEvent>(
    event_receiver: &Receiver<TEvent>,
    running: &Arc<()>,
) -> Result<TEvent, Box<dyn std::error::Error + Send + Sync>> {
    loop {
        match event_receiver.recv_timeout(IDLE_CHECK_INTERVAL) {
            Ok(event) => return Ok(event),
            Err(RecvTimeoutError::Timeout) if Arc::strong_count(running) > 1 => continue,
            Err(RecvTimeoutError::Timeout) => {
                return event_receiver
                    .try_recv()
                    .map_err(|_| "no effects running and no events pending".into());
            }
            Err(e @ RecvTimeoutError::Disconnected) => return Err(e.into()),
        }
    }
}
