//! Frame layout and rendering.

use aura_engine::Role;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::ChatApp;
use crate::widgets::{MessageCell, ThinkingContainer, TypingIndicator};

/// Draws the whole chat view.
pub fn draw(frame: &mut Frame, app: &mut ChatApp) {
    let [header, transcript, notice, input, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, app, header);
    draw_transcript(frame, app, transcript);
    draw_notice(frame, app, notice);
    draw_input(frame, app, input);
    draw_hints(frame, hints);
}

fn draw_header(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let thinking = if app.thinking.active() { "on" } else { "off" };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.assistant().name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("| {} | thinking: {thinking}", app.model().name),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Builds the full transcript as styled lines for the given width.
pub fn transcript_lines(app: &ChatApp, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for msg in app.store.iter() {
        if msg.has_thinking_content {
            lines.extend(
                ThinkingContainer::new(msg)
                    .expanded(app.is_expanded(msg))
                    .frame(app.frame)
                    .lines(width),
            );
        }
        // During the thinking phase the response cell has nothing to
        // show yet; the container above carries the whole message.
        let empty_streaming =
            msg.role == Role::Assistant && msg.is_streaming && msg.content.is_empty();
        if !msg.is_thinking && !empty_streaming {
            lines.extend(MessageCell::new(msg).frame(app.frame).lines(width));
        }
        lines.push(Line::default());
    }
    if app.awaiting_response() {
        lines.push(TypingIndicator::new(app.frame).line());
    }
    lines
}

fn draw_transcript(frame: &mut Frame, app: &mut ChatApp, area: Rect) {
    let lines = transcript_lines(app, area.width);
    let max_scroll = (lines.len() as u16).saturating_sub(area.height);
    if app.follow {
        app.scroll = max_scroll;
    } else {
        app.scroll = app.scroll.min(max_scroll);
        if app.scroll == max_scroll {
            app.follow = true;
        }
    }
    frame.render_widget(Paragraph::new(lines).scroll((app.scroll, 0)), area);
}

fn draw_notice(frame: &mut Frame, app: &ChatApp, area: Rect) {
    if let Some(ref notice) = app.notice {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {notice}"),
                Style::default().fg(Color::Yellow),
            )),
            area,
        );
    }
}

fn draw_input(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let text = if app.input.is_empty() {
        Line::from(vec![
            Span::styled("▏", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("Message {}...", app.assistant().name),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw(app.input.clone()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ])
    };
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_hints(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            " enter send | esc interrupt | ctrl+t thinking | ctrl+e expand | up/down scroll | ctrl+c quit",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )),
        area,
    );
}

#[cfg(test)]
mod tests {
    use aura_catalog::{AssistantRegistry, DEFAULT_ASSISTANT_ID, ModelCatalog};

    use super::*;

    fn app() -> ChatApp {
        let assistants = AssistantRegistry::new();
        let models = ModelCatalog::new();
        ChatApp::new(
            assistants.get(DEFAULT_ASSISTANT_ID).unwrap().clone(),
            models.get("o1-preview").unwrap().clone(),
        )
    }

    #[test]
    fn test_empty_transcript() {
        let app = app();
        assert!(transcript_lines(&app, 80).is_empty());
    }

    #[tokio::test]
    async fn test_transcript_interleaves_messages() {
        let mut app = app();
        app.toggle_thinking();
        app.input = "question".to_string();
        let _rx = app.submit().unwrap();
        while app.is_streaming() {
            app.apply_tick();
        }

        let rendered: Vec<String> = transcript_lines(&app, 120)
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(rendered[0].starts_with("> question"));
        assert!(rendered.iter().any(|l| l.contains("Thought for")));
        assert!(rendered.iter().any(|l| l.contains("o1-preview")));
    }

    #[tokio::test]
    async fn test_thinking_phase_hides_response_cell() {
        let mut app = app();
        app.toggle_thinking();
        app.input = "question".to_string();
        let _rx = app.submit().unwrap();
        app.apply_tick();

        let rendered: Vec<String> = transcript_lines(&app, 120)
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(rendered.iter().any(|l| l.contains("Thinking")));
        // No response text or cursor yet.
        assert!(!rendered.iter().any(|l| l.contains("simulated response")));
    }
}
