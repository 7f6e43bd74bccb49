//! Streaming-reply state machine.
//!
//! Reveals a predetermined [`ReplyScript`] one character per tick
//! against exactly one message, running the thinking phase (when
//! present) fully before the response phase. The simulator itself is
//! synchronous and deterministic; pacing comes from whoever calls
//! [`StreamSimulator::tick`], normally on events from a
//! [`crate::StreamTicker`].

use tracing::warn;

use crate::message::{MessageId, StreamPhase};
use crate::script::ReplyScript;
use crate::store::MessageStore;

/// Lifecycle state of one streamed reply.
///
/// Creation moves straight into `Thinking` or `Responding` depending on
/// whether the script carries thinking text; `Done` is terminal and the
/// target message is never mutated again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorState {
    /// Revealing the thinking text.
    Thinking,
    /// Revealing the response text.
    Responding,
    /// All characters revealed; the message is final.
    Done,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Appended one thinking character.
    ThinkingChar,
    /// Appended the final thinking character and switched to the
    /// response phase; the thinking duration is now set.
    ThinkingComplete,
    /// Appended one response character.
    ResponseChar,
    /// Appended the final response character; streaming is over.
    Complete,
    /// Nothing to do (already done, or the target message is gone).
    Idle,
}

/// Drives the incremental reveal of one assistant reply.
///
/// All state is keyed off the target message id rather than anything
/// global, so several simulators could run against one store without
/// redesign; the chat view only ever runs one at a time.
#[derive(Debug)]
pub struct StreamSimulator {
    target: MessageId,
    script: ReplyScript,
    state: SimulatorState,
    /// Byte offset into the active phase's text. Reset on phase switch.
    cursor: usize,
}

impl StreamSimulator {
    /// Creates the assistant reply message in the store and returns the
    /// simulator that will fill it in.
    ///
    /// The message is created already streaming: in the thinking phase
    /// when the script has thinking text, otherwise directly in the
    /// response phase.
    pub fn begin(store: &mut MessageStore, script: ReplyScript) -> Self {
        let has_thinking = script.has_thinking();
        let target = store.push_assistant_reply(has_thinking);
        Self {
            target,
            script,
            state: if has_thinking {
                SimulatorState::Thinking
            } else {
                SimulatorState::Responding
            },
            cursor: 0,
        }
    }

    /// The id of the one message this simulator may mutate.
    #[inline]
    pub fn message_id(&self) -> MessageId {
        self.target
    }

    #[inline]
    pub fn state(&self) -> SimulatorState {
        self.state
    }

    /// Returns `true` once the reply is fully revealed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == SimulatorState::Done
    }

    /// Advances the reveal by exactly one character.
    ///
    /// The tick that appends the last thinking character also performs
    /// the thinking-to-response transition (computing the thinking
    /// duration); the tick that appends the last response character
    /// clears the streaming flags. Once `Done`, further ticks are
    /// no-ops.
    pub fn tick(&mut self, store: &mut MessageStore) -> TickOutcome {
        match self.state {
            SimulatorState::Done => TickOutcome::Idle,
            SimulatorState::Thinking => self.tick_thinking(store),
            SimulatorState::Responding => self.tick_response(store),
        }
    }

    fn tick_thinking(&mut self, store: &mut MessageStore) -> TickOutcome {
        let Some(msg) = store.get_mut(self.target) else {
            warn!(target_id = %self.target, "streaming target vanished, stopping");
            self.state = SimulatorState::Done;
            return TickOutcome::Idle;
        };

        let text = self.script.thinking().unwrap_or("");
        if let Some(ch) = text[self.cursor..].chars().next() {
            msg.thinking_content.get_or_insert_default().push(ch);
            self.cursor += ch.len_utf8();
            if self.cursor < text.len() {
                return TickOutcome::ThinkingChar;
            }
        }

        // Thinking text exhausted: switch to the response phase.
        let elapsed = msg
            .thinking_started_at
            .map(|t| t.elapsed().as_secs_f64().round() as u64)
            .unwrap_or(0);
        msg.thinking_duration_secs = Some(elapsed);
        msg.is_thinking = false;
        msg.streaming_phase = Some(StreamPhase::Response);
        self.state = SimulatorState::Responding;
        self.cursor = 0;
        TickOutcome::ThinkingComplete
    }

    fn tick_response(&mut self, store: &mut MessageStore) -> TickOutcome {
        let Some(msg) = store.get_mut(self.target) else {
            warn!(target_id = %self.target, "streaming target vanished, stopping");
            self.state = SimulatorState::Done;
            return TickOutcome::Idle;
        };

        let text = self.script.response();
        if let Some(ch) = text[self.cursor..].chars().next() {
            msg.content.push(ch);
            self.cursor += ch.len_utf8();
            if self.cursor < text.len() {
                return TickOutcome::ResponseChar;
            }
        }

        // Response text exhausted: streaming is over, the message is
        // final from here on.
        msg.is_streaming = false;
        msg.streaming_phase = None;
        self.state = SimulatorState::Done;
        TickOutcome::Complete
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::message::StreamPhase;

    fn drive_to_completion(sim: &mut StreamSimulator, store: &mut MessageStore) -> usize {
        let mut ticks = 0;
        while !sim.is_done() {
            sim.tick(store);
            ticks += 1;
            assert!(ticks < 10_000, "simulator failed to terminate");
        }
        ticks
    }

    #[test]
    fn test_thinking_then_response_tick_by_tick() {
        let mut store = MessageStore::new();
        let script = ReplyScript::with_thinking("AB", "XY");
        let mut sim = StreamSimulator::begin(&mut store, script);
        let id = sim.message_id();

        assert_eq!(sim.tick(&mut store), TickOutcome::ThinkingChar);
        assert_eq!(store.get(id).unwrap().thinking_text(), "A");
        assert!(store.get(id).unwrap().is_thinking);

        assert_eq!(sim.tick(&mut store), TickOutcome::ThinkingComplete);
        let msg = store.get(id).unwrap();
        assert_eq!(msg.thinking_text(), "AB");
        assert!(!msg.is_thinking);
        assert!(msg.is_streaming);
        assert_eq!(msg.streaming_phase, Some(StreamPhase::Response));
        assert!(msg.thinking_duration_secs.is_some());
        assert!(msg.content.is_empty());

        assert_eq!(sim.tick(&mut store), TickOutcome::ResponseChar);
        assert_eq!(store.get(id).unwrap().content, "X");

        assert_eq!(sim.tick(&mut store), TickOutcome::Complete);
        let msg = store.get(id).unwrap();
        assert_eq!(msg.content, "XY");
        assert!(!msg.is_streaming);
        assert!(msg.streaming_phase.is_none());
        assert!(msg.thinking_duration_secs.is_some());
    }

    #[test]
    fn test_response_only_tick_by_tick() {
        let mut store = MessageStore::new();
        let mut sim = StreamSimulator::begin(&mut store, ReplyScript::response_only("OK"));
        let id = sim.message_id();

        assert_eq!(sim.state(), SimulatorState::Responding);
        assert!(!store.get(id).unwrap().has_thinking_content);

        assert_eq!(sim.tick(&mut store), TickOutcome::ResponseChar);
        assert_eq!(store.get(id).unwrap().content, "O");

        assert_eq!(sim.tick(&mut store), TickOutcome::Complete);
        let msg = store.get(id).unwrap();
        assert_eq!(msg.content, "OK");
        assert!(!msg.is_streaming);
        assert!(!msg.has_thinking_content);
        assert!(msg.thinking_content.is_none());
    }

    #[test]
    fn test_empty_response_completes_on_first_tick() {
        let mut store = MessageStore::new();
        let mut sim = StreamSimulator::begin(&mut store, ReplyScript::response_only(""));
        let id = sim.message_id();

        assert_eq!(sim.tick(&mut store), TickOutcome::Complete);
        let msg = store.get(id).unwrap();
        assert!(msg.content.is_empty());
        assert!(!msg.is_streaming);
    }

    #[test]
    fn test_final_text_matches_script() {
        let mut store = MessageStore::new();
        let script = ReplyScript::with_thinking("deep thought", "the answer is 42");
        let mut sim = StreamSimulator::begin(&mut store, script.clone());
        let id = sim.message_id();

        drive_to_completion(&mut sim, &mut store);

        let msg = store.get(id).unwrap();
        assert_eq!(msg.thinking_text(), script.thinking().unwrap());
        assert_eq!(msg.content, script.response());
    }

    #[test]
    fn test_append_only_monotonicity() {
        let mut store = MessageStore::new();
        let script = ReplyScript::with_thinking("abc", "defg");
        let mut sim = StreamSimulator::begin(&mut store, script);
        let id = sim.message_id();

        let mut prev_thinking = 0;
        let mut prev_content = 0;
        while !sim.is_done() {
            sim.tick(&mut store);
            let msg = store.get(id).unwrap();
            let thinking = msg.thinking_text().chars().count();
            let content = msg.content.chars().count();
            assert!(thinking >= prev_thinking);
            assert!(content >= prev_content);
            assert!(thinking <= 3);
            assert!(content <= 4);
            prev_thinking = thinking;
            prev_content = content;
        }
    }

    #[test]
    fn test_content_stays_empty_during_thinking() {
        let mut store = MessageStore::new();
        let mut sim = StreamSimulator::begin(&mut store, ReplyScript::with_thinking("abcde", "x"));
        let id = sim.message_id();

        while sim.state() == SimulatorState::Thinking {
            let before = store.get(id).unwrap().content.clone();
            assert!(before.is_empty());
            sim.tick(&mut store);
        }
    }

    #[test]
    fn test_no_mutation_after_done() {
        let mut store = MessageStore::new();
        let mut sim = StreamSimulator::begin(&mut store, ReplyScript::response_only("hi"));
        let id = sim.message_id();
        drive_to_completion(&mut sim, &mut store);

        let snapshot = store.get(id).unwrap().clone();
        for _ in 0..50 {
            assert_eq!(sim.tick(&mut store), TickOutcome::Idle);
        }
        let after = store.get(id).unwrap();
        assert_eq!(after.content, snapshot.content);
        assert_eq!(after.is_streaming, snapshot.is_streaming);
        assert_eq!(after.thinking_duration_secs, snapshot.thinking_duration_secs);
    }

    #[test]
    fn test_ceasing_ticks_freezes_state() {
        // Cancellation is "stop ticking": the message must not change
        // afterwards, however long we wait.
        let mut store = MessageStore::new();
        let mut sim = StreamSimulator::begin(&mut store, ReplyScript::with_thinking("abc", "xyz"));
        let id = sim.message_id();

        sim.tick(&mut store);
        sim.tick(&mut store);
        let snapshot = store.get(id).unwrap().clone();
        drop(sim);

        let after = store.get(id).unwrap();
        assert_eq!(after.thinking_text(), snapshot.thinking_text());
        assert_eq!(after.content, snapshot.content);
        assert!(after.is_streaming);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut store = MessageStore::new();
        let mut sim = StreamSimulator::begin(&mut store, ReplyScript::with_thinking("日本", "語"));
        let id = sim.message_id();

        assert_eq!(sim.tick(&mut store), TickOutcome::ThinkingChar);
        assert_eq!(store.get(id).unwrap().thinking_text(), "日");
        assert_eq!(sim.tick(&mut store), TickOutcome::ThinkingComplete);
        assert_eq!(store.get(id).unwrap().thinking_text(), "日本");
        assert_eq!(sim.tick(&mut store), TickOutcome::Complete);
        assert_eq!(store.get(id).unwrap().content, "語");
    }

    #[test]
    fn test_simulator_only_touches_its_target() {
        let mut store = MessageStore::new();
        let other = store.push_user("untouched");
        let mut sim = StreamSimulator::begin(&mut store, ReplyScript::response_only("reply"));
        drive_to_completion(&mut sim, &mut store);

        assert_eq!(store.get(other).unwrap().content, "untouched");
    }

    #[test]
    fn test_vanished_target_goes_idle() {
        // A fresh empty store stands in for a torn-down view.
        let mut orphaned = MessageStore::new();
        let mut sim = StreamSimulator::begin(&mut orphaned, ReplyScript::response_only("x"));
        let mut unrelated = MessageStore::new();

        assert_eq!(sim.tick(&mut unrelated), TickOutcome::Idle);
        assert!(sim.is_done());
    }
}
