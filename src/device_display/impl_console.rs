use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

pub struct DeviceDisplayConsole {
    last_frame: Vec<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            last_frame: Vec::new(),
        }
    }

    fn render_display(&self) {
        let width = self.chars_per_line();
        println!("┌{}┐", "─".repeat(width + 2));
        for line in &self.last_frame {
            for row in wrap(line, width) {
                println!("│ {:<width$} │", row, width = width);
            }
        }
        println!("└{}┘", "─".repeat(width + 2));
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn show(&mut self, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.last_frame == lines {
            return Ok(());
        }
        self.last_frame = lines.to_vec();
        self.render_display();
        Ok(())
    }
}

/// Greedy word wrap. Words longer than `width` get a row of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let indent: String = text.chars().take_while(|c| *c == ' ').collect();
    let mut rows = Vec::new();
    let mut row = indent.clone();

    for word in text.split_whitespace() {
        if row.trim().is_empty() {
            row.push_str(word);
        } else if row.chars().count() + 1 + word.chars().count() <= width {
            row.push(' ');
            row.push_str(word);
        } else {
            rows.push(row);
            row = format!("{}{}", indent, word);
        }
    }

    if !row.trim().is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}
