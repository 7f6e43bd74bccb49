//! Animated typing indicator.
//!
//! Shown in the short window between submitting and the first revealed
//! response character.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const DOT_FRAMES: [&str; 4] = ["·", "··", "···", "··"];

pub struct TypingIndicator {
    frame: u64,
}

impl TypingIndicator {
    pub fn new(frame: u64) -> Self {
        Self { frame }
    }

    pub fn line(&self) -> Line<'static> {
        let dots = DOT_FRAMES[(self.frame as usize / 5) % DOT_FRAMES.len()];
        Line::from(Span::styled(
            dots.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots_cycle_with_frames() {
        let first = TypingIndicator::new(0).line().to_string();
        let later = TypingIndicator::new(5).line().to_string();
        assert_ne!(first, later);

        // Wraps around the frame table.
        let wrapped = TypingIndicator::new(20).line().to_string();
        assert_eq!(first, wrapped);
    }
}
