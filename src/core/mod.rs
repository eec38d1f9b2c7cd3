//! Core business logic - framework-agnostic operations on clients, services and requests.
//!
//! Every function takes a borrowed connection and issues its statements on it; opening
//! and releasing that connection is the caller's job.

/// Schema creation and one-time catalog seeding
pub mod bootstrap;
/// Client listing and creation
pub mod client;
/// Request listing, creation and status updates
pub mod request;
/// Read-only access to the fixed service catalog
pub mod service;
