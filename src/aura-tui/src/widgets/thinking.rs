//! Collapsible thinking container.
//!
//! Shown above an assistant reply that carries a thinking phase. While
//! the phase streams the container is forced open with a pulsing
//! header; once it completes the header flips to "Thought for Ns" and
//! the body collapses until toggled.

use aura_engine::Message;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const HEADER_GLYPH: &str = "✳";

/// Body lines are indented under the header.
const BODY_INDENT: &str = "  ";

pub struct ThinkingContainer<'a> {
    message: &'a Message,
    expanded: bool,
    frame: u64,
}

impl<'a> ThinkingContainer<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self {
            message,
            expanded: false,
            frame: 0,
        }
    }

    /// Sets whether the body is shown. Ignored while the thinking
    /// phase is still streaming, which always shows it.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Sets the render frame, used for the header pulse.
    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    fn header(&self) -> Line<'static> {
        if self.message.is_thinking {
            // Two-tone pulse on the render frame counter.
            let color = if (self.frame / 10) % 2 == 0 {
                Color::Magenta
            } else {
                Color::DarkGray
            };
            Line::from(Span::styled(
                format!("{HEADER_GLYPH} Thinking"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        } else {
            let secs = self.message.thinking_duration_secs.unwrap_or(0);
            let toggle_hint = if self.expanded { "" } else { "  (ctrl+e)" };
            Line::from(vec![
                Span::styled(
                    format!("{HEADER_GLYPH} Thought for {secs}s"),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    toggle_hint.to_string(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::DIM),
                ),
            ])
        }
    }

    /// Produces header plus, when open, the wrapped thinking text.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![self.header()];
        if !self.message.is_thinking && !self.expanded {
            return lines;
        }

        let wrap_width = (width as usize).max(BODY_INDENT.len() + 1);
        let options = textwrap::Options::new(wrap_width)
            .initial_indent(BODY_INDENT)
            .subsequent_indent(BODY_INDENT);
        let style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC);
        for wrapped in textwrap::wrap(self.message.thinking_text(), options) {
            lines.push(Line::from(Span::styled(wrapped.to_string(), style)));
        }
        if self.message.is_thinking
            && let Some(last) = lines.last_mut()
        {
            last.push_span(Span::styled("▌", Style::default().fg(Color::Magenta)));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use aura_engine::MessageStore;

    use super::*;

    fn thinking_message(store: &mut MessageStore, text: &str, streaming: bool) -> aura_engine::MessageId {
        let id = store.push_assistant_reply(true);
        let msg = store.get_mut(id).unwrap();
        msg.thinking_content = Some(text.to_string());
        if !streaming {
            msg.is_thinking = false;
            msg.thinking_duration_secs = Some(3);
        }
        id
    }

    #[test]
    fn test_streaming_header_and_body_always_shown() {
        let mut store = MessageStore::new();
        let id = thinking_message(&mut store, "reasoning so far", true);

        let lines = ThinkingContainer::new(store.get(id).unwrap())
            .expanded(false)
            .lines(80);
        assert!(lines[0].to_string().contains("Thinking"));
        assert!(lines[1].to_string().contains("reasoning so far"));
    }

    #[test]
    fn test_completed_header_shows_duration() {
        let mut store = MessageStore::new();
        let id = thinking_message(&mut store, "done reasoning", false);

        let lines = ThinkingContainer::new(store.get(id).unwrap()).lines(80);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].to_string().contains("Thought for 3s"));
    }

    #[test]
    fn test_expanded_after_completion_shows_body() {
        let mut store = MessageStore::new();
        let id = thinking_message(&mut store, "done reasoning", false);

        let lines = ThinkingContainer::new(store.get(id).unwrap())
            .expanded(true)
            .lines(80);
        assert!(lines.len() > 1);
        assert!(lines[1].to_string().contains("done reasoning"));
    }

    #[test]
    fn test_missing_thinking_buffer_renders_header_only() {
        let mut store = MessageStore::new();
        let id = store.push_assistant_reply(true);
        store.get_mut(id).unwrap().thinking_content = None;

        // Must not panic on a partially-populated message.
        let lines = ThinkingContainer::new(store.get(id).unwrap()).lines(80);
        assert!(lines[0].to_string().contains("Thinking"));
    }
}
