//! Response streaming domain.
//!
//! [`session::StreamSession`] accumulates the frames of one chat turn and
//! recognises the [`session::END_OF_STREAM_SENTINEL`] and early-stop rules.

pub mod session;
