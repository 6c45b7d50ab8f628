//! HTTP client implementation.
//!
//! This module provides the HTTP client and wire types for the book API.

mod client;
mod endpoints;

pub(crate) use client::ApiClient;
pub(crate) use endpoints::*;
