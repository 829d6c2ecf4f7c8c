//! Outbound adapters implementing domain ports.
//!
//! Adapters are thin translators between domain types and their backing
//! infrastructure. They contain no business logic of their own.
//!
//! - **memory**: process-local workout storage, discarded on restart

pub mod memory;
