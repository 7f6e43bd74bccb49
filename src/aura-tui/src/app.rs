//! Chat view state and logic.
//!
//! [`ChatApp`] owns the message store and the active stream, and is
//! mutated only from the event loop. Widgets render from it but never
//! write back.

use std::collections::HashSet;

use aura_catalog::{Assistant, Model};
use aura_engine::{
    Message, MessageId, MessageStore, StreamPhase, StreamSimulator, StreamTicker, ThinkingMode,
    TickOutcome, TickerConfig, TickerHandle, simulated_reply,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// State for the interactive chat session.
pub struct ChatApp {
    pub store: MessageStore,
    assistant: Assistant,
    model: Model,
    pub thinking: ThinkingMode,
    /// The input line being composed.
    pub input: String,
    /// Active stream, if a reply is being revealed.
    simulator: Option<StreamSimulator>,
    /// Metronome for the active stream. Dropping it stops the ticks.
    ticker: Option<TickerHandle>,
    /// Completed thinking containers the user has toggled open.
    expanded: HashSet<MessageId>,
    /// One-line status notice shown above the input.
    pub notice: Option<String>,
    /// Transcript scroll offset from the top, in lines.
    pub scroll: u16,
    /// Keep the view pinned to the newest line while streaming.
    pub follow: bool,
    pub should_quit: bool,
    /// Render frame counter, drives the pulse and cursor blink.
    pub frame: u64,
}

impl ChatApp {
    pub fn new(assistant: Assistant, model: Model) -> Self {
        let thinking = ThinkingMode::for_model(model.thinking_supported);
        Self {
            store: MessageStore::new(),
            assistant,
            model,
            thinking,
            input: String::new(),
            simulator: None,
            ticker: None,
            expanded: HashSet::new(),
            notice: None,
            scroll: 0,
            follow: true,
            should_quit: false,
            frame: 0,
        }
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Whether a reply is currently being revealed.
    pub fn is_streaming(&self) -> bool {
        self.simulator.as_ref().is_some_and(|s| !s.is_done())
    }

    /// Submits the composed input line.
    ///
    /// Returns the tick receiver for the new stream, or `None` when
    /// nothing was submitted (empty input, or a reply still streaming).
    pub fn submit(&mut self) -> Option<mpsc::Receiver<()>> {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return None;
        }
        if self.is_streaming() {
            self.notice = Some("Wait for the current response to finish.".to_string());
            return None;
        }

        self.input.clear();
        self.notice = None;
        self.store.push_user(text);

        let script = simulated_reply(&self.assistant.name, &self.model.name, self.thinking.active());
        let has_thinking = script.has_thinking();
        let simulator = StreamSimulator::begin(&mut self.store, script);
        debug!(target = %simulator.message_id(), thinking = has_thinking, "reply started");
        self.simulator = Some(simulator);

        let (handle, rx) = if has_thinking {
            StreamTicker::start_thinking(TickerConfig::default())
        } else {
            StreamTicker::start_response(TickerConfig::default())
        };
        self.ticker = Some(handle);
        self.follow = true;
        Some(rx)
    }

    /// Applies one tick from the active stream's metronome.
    pub fn apply_tick(&mut self) {
        let Some(simulator) = self.simulator.as_mut() else {
            return;
        };
        let outcome = simulator.tick(&mut self.store);
        let done = simulator.is_done();

        if outcome == TickOutcome::ThinkingComplete
            && let Some(ticker) = &self.ticker
        {
            ticker.switch_to_response();
        }
        if done {
            self.ticker = None;
            self.simulator = None;
        }
    }

    /// Stops the active stream and finalizes its message as-is.
    pub fn interrupt(&mut self) {
        let Some(simulator) = self.simulator.take() else {
            return;
        };
        // Drop cancels the ticker task before we touch the message.
        self.ticker = None;

        if let Some(msg) = self.store.get_mut(simulator.message_id()) {
            if msg.is_thinking {
                let elapsed = msg
                    .thinking_started_at
                    .map(|t| t.elapsed().as_secs_f64().round() as u64)
                    .unwrap_or(0);
                msg.thinking_duration_secs = Some(elapsed);
                msg.is_thinking = false;
            }
            msg.is_streaming = false;
            msg.streaming_phase = None;
        }
        self.notice = Some("Response interrupted.".to_string());
        info!("streaming interrupted");
    }

    /// Toggles the thinking mode, when the model supports it.
    pub fn toggle_thinking(&mut self) {
        self.thinking.toggle();
        self.notice = Some(if !self.thinking.available() {
            format!("{} does not support thinking.", self.model.name)
        } else if self.thinking.active() {
            "Thinking mode on.".to_string()
        } else {
            "Thinking mode off.".to_string()
        });
    }

    /// Whether a message's thinking container is shown open.
    ///
    /// Forced open while the thinking phase is streaming; afterwards it
    /// collapses and the user can toggle it.
    pub fn is_expanded(&self, msg: &Message) -> bool {
        msg.is_thinking || self.expanded.contains(&msg.id)
    }

    /// Toggles the most recent completed thinking container.
    pub fn toggle_last_thinking(&mut self) {
        let target = self
            .store
            .iter()
            .rev()
            .find(|m| m.has_thinking_content && !m.is_thinking)
            .map(|m| m.id);
        if let Some(id) = target
            && !self.expanded.remove(&id)
        {
            self.expanded.insert(id);
        }
    }

    /// Whether to show the typing indicator: the response phase is
    /// active but no character has arrived yet.
    pub fn awaiting_response(&self) -> bool {
        self.store
            .last()
            .is_some_and(|m| m.is_streaming_phase(StreamPhase::Response) && m.content.is_empty())
    }

    pub fn scroll_up(&mut self) {
        self.follow = false;
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use aura_catalog::{AssistantRegistry, DEFAULT_ASSISTANT_ID, ModelCatalog};
    use aura_engine::Role;

    use super::*;

    fn app_with_model(model_id: &str) -> ChatApp {
        let assistants = AssistantRegistry::new();
        let models = ModelCatalog::new();
        ChatApp::new(
            assistants.get(DEFAULT_ASSISTANT_ID).unwrap().clone(),
            models.get(model_id).unwrap().clone(),
        )
    }

    fn drive(app: &mut ChatApp) {
        let mut guard = 0;
        while app.is_streaming() {
            app.apply_tick();
            guard += 1;
            assert!(guard < 10_000);
        }
    }

    #[tokio::test]
    async fn test_submit_pushes_user_and_reply() {
        let mut app = app_with_model("gpt-4o");
        app.input = "Hello".to_string();
        let rx = app.submit();
        assert!(rx.is_some());
        assert!(app.input.is_empty());

        assert_eq!(app.store.len(), 2);
        let mut iter = app.store.iter();
        assert_eq!(iter.next().unwrap().role, Role::User);
        let reply = iter.next().unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert!(reply.is_streaming);
        // gpt-4o has no thinking phase.
        assert!(!reply.has_thinking_content);
    }

    #[tokio::test]
    async fn test_empty_input_is_ignored() {
        let mut app = app_with_model("gpt-4o");
        app.input = "   ".to_string();
        assert!(app.submit().is_none());
        assert!(app.store.is_empty());
    }

    #[tokio::test]
    async fn test_submit_while_streaming_rejected() {
        let mut app = app_with_model("gpt-4o");
        app.input = "first".to_string();
        let _rx = app.submit().unwrap();

        app.input = "second".to_string();
        assert!(app.submit().is_none());
        assert!(app.notice.as_deref().unwrap().contains("current response"));
        // The rejected input stays in the compose line.
        assert_eq!(app.input, "second");
        assert_eq!(app.store.len(), 2);
    }

    #[tokio::test]
    async fn test_thinking_model_streams_both_phases() {
        let mut app = app_with_model("o1-preview");
        app.toggle_thinking();
        assert!(app.thinking.active());

        app.input = "why?".to_string();
        let _rx = app.submit().unwrap();
        drive(&mut app);

        let reply = app.store.last().unwrap();
        assert!(reply.has_thinking_content);
        assert!(!reply.thinking_text().is_empty());
        assert!(reply.content.contains("o1-preview"));
        assert!(!reply.is_streaming);
        assert!(reply.thinking_duration_secs.is_some());
    }

    #[tokio::test]
    async fn test_thinking_toggle_unsupported_model() {
        let mut app = app_with_model("gpt-4o");
        app.toggle_thinking();
        assert!(!app.thinking.active());
        assert!(app.notice.as_deref().unwrap().contains("does not support"));
    }

    #[tokio::test]
    async fn test_interrupt_finalizes_message() {
        let mut app = app_with_model("gpt-4o");
        app.input = "hi".to_string();
        let _rx = app.submit().unwrap();
        app.apply_tick();

        app.interrupt();
        assert!(!app.is_streaming());
        let reply = app.store.last().unwrap();
        assert!(!reply.is_streaming);
        assert!(reply.streaming_phase.is_none());

        // A new submission is accepted afterwards.
        app.input = "again".to_string();
        assert!(app.submit().is_some());
    }

    #[tokio::test]
    async fn test_thinking_container_expansion() {
        let mut app = app_with_model("o1-preview");
        app.toggle_thinking();
        app.input = "think".to_string();
        let _rx = app.submit().unwrap();

        // Forced open while the thinking phase streams.
        app.apply_tick();
        let reply = app.store.last().unwrap().clone();
        assert!(reply.is_thinking);
        assert!(app.is_expanded(&reply));

        drive(&mut app);
        let reply = app.store.last().unwrap().clone();
        assert!(!app.is_expanded(&reply));

        app.toggle_last_thinking();
        let reply = app.store.last().unwrap().clone();
        assert!(app.is_expanded(&reply));
        app.toggle_last_thinking();
        let reply = app.store.last().unwrap().clone();
        assert!(!app.is_expanded(&reply));
    }

    #[tokio::test]
    async fn test_full_stream_reaches_final_text() {
        let mut app = app_with_model("claude-3-haiku");
        app.input = "hello".to_string();
        let _rx = app.submit().unwrap();
        drive(&mut app);

        let reply = app.store.last().unwrap();
        assert!(reply.content.contains("Claude 3 Haiku"));
        assert!(reply.content.contains("Aura AI"));
        assert!(!reply.is_streaming);
    }
}
