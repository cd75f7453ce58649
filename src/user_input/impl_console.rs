use crate::user_input::interface::{Command, UserInput};
use std::io::{BufRead, Write};

pub struct UserInputConsole {}

impl UserInputConsole {
    pub fn new() -> Self {
        Self {}
    }
}

pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "c" | "camera" => Some(Command::CaptureFromCamera),
        "g" | "gallery" => Some(Command::SelectFromGallery),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

impl UserInput for UserInputConsole {
    fn next_command(&self) -> Result<Option<Command>, Box<dyn std::error::Error + Send + Sync>> {
        let mut stdout = std::io::stdout();

        loop {
            write!(stdout, "[c]amera, [g]allery, [q]uit: ")?;
            stdout.flush()?;

            let mut line = String::new();
            if std::io::stdin().lock().read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_command(&line) {
                Some(command) => return Ok(Some(command)),
                None if line.trim().is_empty() => continue,
                None => writeln!(stdout, "Unknown command {:?}", line.trim())?,
            }
        }
    }
}
