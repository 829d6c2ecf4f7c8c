//! Inbound adapters that translate external requests into calls on the
//! domain ports while keeping framework details at the edge.
//!
//! HTTP is the only transport; its handlers live under [`http`].

pub mod http;
