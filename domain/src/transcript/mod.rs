//! Transcript domain.
//!
//! - [`entities::Message`]: a single role-tagged transcript entry
//! - [`store::Transcript`]: the append-only, seeded message sequence of one session

pub mod entities;
pub mod store;
