//! Single message cell.

use aura_engine::{Message, Role, StreamPhase};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// The cursor character displayed at the end of streaming text.
const STREAMING_CURSOR: &str = "▌";

/// Renders one chat message as wrapped transcript lines.
///
/// While the response phase is streaming, a cursor trails the revealed
/// text, blinking on the render frame counter.
pub struct MessageCell<'a> {
    message: &'a Message,
    frame: u64,
}

impl<'a> MessageCell<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message, frame: 0 }
    }

    /// Sets the render frame, used for cursor blink.
    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    fn role_style(&self) -> Style {
        match self.message.role {
            Role::User => Style::default().fg(Color::Cyan),
            Role::Assistant => Style::default(),
            Role::System => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        }
    }

    fn cursor_visible(&self) -> bool {
        // ~2 Hz blink at a 30 fps frame cadence.
        self.message.is_streaming_phase(StreamPhase::Response) && (self.frame / 8) % 2 == 0
    }

    /// Produces the wrapped lines for the given width.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let style = self.role_style();
        let prefix = self.message.role.prefix();
        let indent = " ".repeat(prefix.width());
        let wrap_width = (width as usize).max(prefix.width() + 1);

        let options = textwrap::Options::new(wrap_width)
            .initial_indent(prefix)
            .subsequent_indent(&indent);
        let wrapped = textwrap::wrap(&self.message.content, options);

        let mut lines: Vec<Line<'static>> = wrapped
            .iter()
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(prefix.to_string(), style)));
        }

        if self.cursor_visible()
            && let Some(last) = lines.last_mut()
        {
            last.push_span(Span::styled(
                STREAMING_CURSOR,
                Style::default().fg(Color::Cyan),
            ));
        }
        lines
    }
}
