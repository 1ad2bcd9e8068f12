//! Host network service API types
//!
//! This library defines the wire documents exchanged with the host network
//! control plane:
//! - HostNetwork: a virtual network with its MAC pool and IPAM blocks
//! - HostEndpoint: a virtual interface attached to one network
//! - HostLoadBalancer: a VIP/port-mapping rule set over a group of endpoints

pub mod v2;

pub use v2::{HostEndpoint, HostLoadBalancer, HostNetwork};
