// src/core/mod.rs

pub mod cypher;
pub mod net;

pub use net::{HttpTransport, NetError, Transport};
