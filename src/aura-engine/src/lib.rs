//! Core engine for the Aura assistant platform prototype.
//!
//! Everything in this crate is a local simulation: replies are scripted
//! strings revealed character by character, there is no network and no
//! persistence. The crate provides:
//!
//! - [`Message`] / [`MessageStore`] - the ordered conversation record
//! - [`StreamSimulator`] - the per-message streaming state machine
//! - [`StreamTicker`] - the cancellable metronome that drives it
//! - [`simulated_reply`] - the mock reply generator
//! - [`ThinkingMode`] - the user-facing thinking display preference

mod error;
mod message;
mod reply;
mod script;
mod simulator;
mod store;
mod thinking;
mod ticker;

pub use error::StreamError;
pub use message::{Message, MessageId, Role, StreamPhase};
pub use reply::simulated_reply;
pub use script::ReplyScript;
pub use simulator::{SimulatorState, StreamSimulator, TickOutcome};
pub use store::MessageStore;
pub use thinking::ThinkingMode;
pub use ticker::{StreamTicker, TickerConfig, TickerHandle};
