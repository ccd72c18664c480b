//! Chat Turn use case.
//!
//! One user submission and its assistant response: the user message is
//! appended to the transcript, the response is streamed, and the assistant
//! message is appended once the stream finishes.
//!
//! A failed stream leaves the transcript with the user message only. The
//! error, including any partial text, goes back to the caller, which decides
//! how to present it.

use crate::config::ChatSettings;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::surface::ResponseObserver;
use crate::use_cases::stream_response::{
    StreamError, StreamOutcome, StreamResponseInput, StreamResponseUseCase,
};
use chat_domain::{DomainError, Message, Termination, Transcript};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Use case for running a chat turn against a session transcript.
pub struct ChatTurnUseCase {
    stream: StreamResponseUseCase,
    settings: ChatSettings,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ChatTurnUseCase {
    pub fn new(stream: StreamResponseUseCase, settings: ChatSettings) -> Self {
        Self {
            stream,
            settings,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Run one turn.
    ///
    /// A blank request is rejected before the transcript is touched. A
    /// cancelled turn that produced text records that text as the
    /// assistant message.
    pub async fn execute(
        &self,
        transcript: &mut Transcript,
        request: &str,
        observer: &dyn ResponseObserver,
        cancel: &CancellationToken,
    ) -> Result<StreamOutcome, StreamError> {
        if request.trim().is_empty() {
            return Err(StreamError::InvalidRequest(DomainError::EmptyRequest));
        }

        let identity = transcript.identity().clone();
        transcript.append(Message::user(request));
        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            serde_json::json!({
                "user_id": identity.user_id(),
                "chat_id": identity.chat_id(),
                "text": request,
            }),
        ));

        let input = StreamResponseInput::new(self.settings.target_for(&identity), request);
        let result = self.stream.execute(input, observer, cancel).await;

        match &result {
            Ok(outcome) => {
                if outcome.termination == Termination::Cancelled && outcome.text.is_empty() {
                    debug!("Cancelled turn produced no text; nothing recorded");
                } else {
                    transcript.append(Message::assistant(outcome.text.clone()));
                }
                info!(
                    "Turn complete for {}: {} visible messages",
                    identity,
                    transcript.len()
                );
                self.conversation_logger.log(ConversationEvent::new(
                    "assistant_response",
                    serde_json::json!({
                        "chat_id": identity.chat_id(),
                        "termination": outcome.termination.as_str(),
                        "frames": outcome.frames,
                        "bytes": outcome.text.len(),
                        "text": outcome.text,
                    }),
                ));
            }
            Err(e) => {
                self.conversation_logger.log(ConversationEvent::new(
                    "turn_failed",
                    serde_json::json!({
                        "chat_id": identity.chat_id(),
                        "kind": format!("{:?}", e.kind()),
                        "error": e.to_string(),
                        "partial": e.partial(),
                    }),
                ));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chat_transport::TransportError;
    use crate::ports::surface::NoObserver;
    use crate::use_cases::stream_response::StreamErrorKind;
    use crate::use_cases::stream_response::tests::{RecordingObserver, ScriptedTransport};
    use chat_domain::{ApiEndpoints, END_OF_STREAM_SENTINEL, SessionIdentity};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    fn use_case(transport: ScriptedTransport, stream_response: bool) -> ChatTurnUseCase {
        let settings = ChatSettings::new(
            &ApiEndpoints::new("127.0.0.1:9").with_tls(false),
            stream_response,
        );
        ChatTurnUseCase::new(StreamResponseUseCase::new(Arc::new(transport)), settings)
    }

    fn transcript() -> Transcript {
        Transcript::seeded(SessionIdentity::new("user-1", "chat-1"))
    }

    #[tokio::test]
    async fn test_turn_appends_user_and_assistant() {
        let turn = use_case(
            ScriptedTransport::texts(&["Hel", "lo", END_OF_STREAM_SENTINEL]),
            true,
        );
        let mut transcript = transcript();
        let observer = RecordingObserver::default();

        let outcome = turn
            .execute(&mut transcript, "Hi", &observer, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.text, "Hello");
        assert_eq!(
            transcript.visible(),
            &[Message::user("Hi"), Message::assistant("Hello")]
        );
        assert_eq!(transcript.entries().len(), 4);
    }

    #[tokio::test]
    async fn test_streaming_disabled_turn_keeps_first_chunk() {
        let turn = use_case(
            ScriptedTransport::texts(&["First chunk", "ignored", END_OF_STREAM_SENTINEL]),
            false,
        );
        let mut transcript = transcript();

        let outcome = turn
            .execute(&mut transcript, "Hi", &NoObserver, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.termination, Termination::EarlyStop);
        assert_eq!(transcript.visible()[1], Message::assistant("First chunk"));
    }

    #[tokio::test]
    async fn test_connect_failure_records_user_message_only() {
        let turn = use_case(
            ScriptedTransport::failing_connect(TransportError::ConnectionError(
                "refused".to_string(),
            )),
            true,
        );
        let mut transcript = transcript();

        let err = turn
            .execute(&mut transcript, "Hi", &NoObserver, &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), StreamErrorKind::Connect);
        assert_eq!(transcript.visible(), &[Message::user("Hi")]);
    }

    #[tokio::test]
    async fn test_disconnect_keeps_partial_out_of_transcript() {
        let turn = use_case(ScriptedTransport::texts(&["half an"]), true);
        let mut transcript = transcript();

        let err = turn
            .execute(&mut transcript, "Hi", &NoObserver, &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(err.partial(), Some("half an"));
        assert_eq!(transcript.len(), 1);
    }

    #[tokio::test]
    async fn test_blank_request_leaves_transcript_untouched() {
        let transport = ScriptedTransport::texts(&["x"]);
        let turn = use_case(transport, true);
        let mut transcript = transcript();

        let err = turn
            .execute(&mut transcript, "   ", &NoObserver, &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), StreamErrorKind::InvalidRequest);
        assert!(transcript.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_turn_without_text_records_nothing() {
        let turn = use_case(ScriptedTransport::texts(&["x"]), true);
        let mut transcript = transcript();
        let token = CancellationToken::new();
        token.cancel();

        let outcome = turn
            .execute(&mut transcript, "Hi", &NoObserver, &token)
            .await
            .unwrap();

        assert_eq!(outcome.termination, Termination::Cancelled);
        assert_eq!(transcript.visible(), &[Message::user("Hi")]);
    }

    #[tokio::test]
    async fn test_turns_accumulate_in_order() {
        let mut transcript = transcript();
        for (request, reply) in [("one", "1"), ("two", "2")] {
            let turn = use_case(ScriptedTransport::texts(&[reply, END_OF_STREAM_SENTINEL]), true);
            turn.execute(&mut transcript, request, &NoObserver, &CancellationToken::new())
                .await
                .unwrap();
        }

        let texts: Vec<_> = transcript.renderable().filter_map(|m| m.text()).collect();
        assert_eq!(texts, vec!["one", "1", "two", "2"]);
    }

    #[tokio::test]
    async fn test_conversation_events_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let turn = use_case(ScriptedTransport::texts(&["ok", END_OF_STREAM_SENTINEL]), true)
            .with_conversation_logger(logger.clone());
        let mut transcript = transcript();

        turn.execute(&mut transcript, "Hi", &NoObserver, &CancellationToken::new())
            .await
            .unwrap();

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "user_message");
        assert_eq!(events[0].1["text"], "Hi");
        assert_eq!(events[1].0, "assistant_response");
        assert_eq!(events[1].1["termination"], "sentinel");
        assert_eq!(events[1].1["text"], "ok");
    }

    #[tokio::test]
    async fn test_failed_turn_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let turn = use_case(
            ScriptedTransport::failing_connect(TransportError::ConnectionError("down".to_string())),
            true,
        )
        .with_conversation_logger(logger.clone());
        let mut transcript = transcript();

        let _ = turn
            .execute(&mut transcript, "Hi", &NoObserver, &CancellationToken::new())
            .await;

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].0, "turn_failed");
        assert_eq!(events[1].1["kind"], "Connect");
        assert!(events[1].1["partial"].is_null());
    }
}
