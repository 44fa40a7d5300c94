//! Decision Compass - Decision-Assistant Chat Service
//!
//! This crate implements a templated decision-analysis chat: a keyword
//! classifier picks a decision category, a template engine renders a canned
//! markdown report, and a conversation store keeps sessions and messages
//! across restarts.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod store;
