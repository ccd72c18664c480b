//! Application layer for agent-chat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatSettings;
pub use ports::{
    chat_transport::{ChatConnection, ChatTransport, InboundFrame, TransportError},
    config_provider::{ConfigFetchError, ConfigProvider},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    surface::{ChatSurface, NoObserver, ResponseObserver},
};
pub use use_cases::chat_turn::ChatTurnUseCase;
pub use use_cases::display_config::DisplayConfigUseCase;
pub use use_cases::stream_response::{
    StreamError, StreamErrorKind, StreamOutcome, StreamResponseInput, StreamResponseUseCase,
};
