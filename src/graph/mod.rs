//! Graph API request engine.
//!
//! This module provides the HTTP client that every operation surface
//! goes through. Surfaces never build URIs or parse envelopes
//! themselves.

mod client;

pub use client::GraphClient;
