//! Rendering surface port
//!
//! Defines how the application layer hands output to the UI: the static
//! title and config panel, transcript entries, and the growing response
//! buffer while a turn is streaming.

use chat_domain::{ConfigPanel, Message};

/// Callback for incremental response display
///
/// Implementations live in the presentation layer and can display the
/// stream in various ways (console, web UI, etc.)
pub trait ResponseObserver: Send + Sync {
    /// Called once the request has been sent, before the first frame.
    fn on_response_start(&self) {}

    /// Called after every appended frame with the cumulative buffer.
    fn on_partial(&self, buffer: &str);

    /// Called when the turn stops receiving, successfully or not.
    fn on_response_end(&self) {}
}

/// The full rendering surface of the chat front-end
pub trait ChatSurface: ResponseObserver {
    fn show_title(&self);

    fn show_config_panel(&self, panel: &ConfigPanel);

    /// Render one transcript entry. Only textual entries are passed in.
    fn show_message(&self, message: &Message);

    /// Tell the user a turn produced no response.
    fn show_turn_failed(&self, reason: &str, partial: Option<&str>);
}

/// No-op observer for when incremental display is not needed
pub struct NoObserver;

impl ResponseObserver for NoObserver {
    fn on_partial(&self, _buffer: &str) {}
}
