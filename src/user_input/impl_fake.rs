use crate::user_input::interface::{Command, UserInput};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Replays commands, each after its delay, then reports end of input.
pub struct UserInputFake {
    script: Mutex<VecDeque<(Duration, Command)>>,
    trailing_delay: Duration,
}

impl UserInputFake {
    pub fn new(script: Vec<(Duration, Command)>, trailing_delay: Duration) -> Self {
        Self {
            script: Mutex::new(script.into()),
            trailing_delay,
        }
    }
}

impl UserInput for UserInputFake {
    fn next_command(&self) -> Result<Option<Command>, Box<dyn std::error::Error + Send + Sync>> {
        let next = self
            .script
            .lock()
            .map_err(|_| "input script lock poisoned")?
            .pop_front();

        match next {
            Some((delay, command)) => {
                std::thread::sleep(delay);
                Ok(Some(command))
            }
            None => {
                std::thread::sleep(self.trailing_delay);
                Ok(None)
            }
        }
    }
}
