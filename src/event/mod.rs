//! Everything about the events of the application.
//!
//! - [`fm_events::FmEvents`] every event received by the main loop: typed lines, completed scans and changes of the matches,
//! - [`event_poller::EventReader`] reads the typed lines in a thread and receives every event,
//! - [`action_map::Action`] a parsed command and [`action_map::ActionMap`] its keyword,
//! - [`event_action::EventAction`] links the commands to the status,
//! - [`event_dispatch::EventDispatcher`] reacts to every event.

mod action_map;
mod event_action;
mod event_dispatch;
mod event_poller;
mod fm_events;

pub use action_map::{Action, ActionMap};
pub use event_action::EventAction;
pub use event_dispatch::EventDispatcher;
pub use event_poller::EventReader;
pub use fm_events::FmEvents;
