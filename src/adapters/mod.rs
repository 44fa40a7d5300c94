//! Adapters - concrete implementations of the ports.

pub mod generator;
pub mod http;
pub mod storage;
