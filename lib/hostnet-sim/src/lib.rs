//! In-memory simulator of the host network control plane
//!
//! This library provides:
//! - The capability surface a network proxy consumes (`HostNetworkService`)
//! - An in-memory store answering that surface with schema-accurate documents
//! - A deterministic generator for the simulator's single overlay network

pub mod error;
pub mod network;
pub mod service;
pub mod store;

pub use error::{Result, SimError};
pub use network::overlay_network;
pub use service::HostNetworkService;
pub use store::HostNetworkStore;
