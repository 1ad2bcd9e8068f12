//! The simulator's single overlay network
//!
//! The network is never stored: every query rebuilds the descriptor from the
//! constants below plus the caller's requested name, so repeated calls cannot
//! diverge. Test fixtures assert against these values verbatim.

use hostnet_api::v2::{HostNetwork, Ipam, MacPool, MacRange, Route, SchemaVersion, Subnet};

/// Identifier carried by the simulated network and stamped on every endpoint
pub const NETWORK_ID: &str = "123ABC";

/// Driver type of the simulated network
pub const NETWORK_TYPE: &str = "overlay";

/// Start of the simulated MAC pool
pub const MAC_RANGE_START: &str = "00-15-5D-52-C0-00";
/// End of the simulated MAC pool
pub const MAC_RANGE_END: &str = "00-15-5D-52-CF-FF";

/// The one static subnet of the simulated network
pub const SUBNET_PREFIX: &str = "192.168.1.0/24";
/// Gateway the default route points at
pub const GATEWAY_IP: &str = "192.168.1.1";
/// Destination of the default route
pub const DEFAULT_ROUTE_PREFIX: &str = "0.0.0.0/0";

/// Build the network descriptor for the requested name.
pub fn overlay_network(name: &str) -> HostNetwork {
    HostNetwork {
        id: NETWORK_ID.to_string(),
        name: name.to_string(),
        network_type: NETWORK_TYPE.to_string(),
        mac_pool: MacPool {
            ranges: vec![MacRange {
                start_mac_address: MAC_RANGE_START.to_string(),
                end_mac_address: MAC_RANGE_END.to_string(),
            }],
        },
        ipams: vec![Ipam {
            ipam_type: "Static".to_string(),
            subnets: vec![Subnet {
                ip_address_prefix: SUBNET_PREFIX.to_string(),
                routes: vec![Route {
                    next_hop: GATEWAY_IP.to_string(),
                    destination_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
                }],
            }],
        }],
        schema_version: SchemaVersion::current(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_network_constants() {
        let network = overlay_network("foo");
        assert_eq!(network.id, "123ABC");
        assert_eq!(network.name, "foo");
        assert_eq!(network.network_type, "overlay");
        assert_eq!(network.mac_pool.ranges.len(), 1);
        assert_eq!(network.mac_pool.ranges[0].start_mac_address, "00-15-5D-52-C0-00");
        assert_eq!(network.mac_pool.ranges[0].end_mac_address, "00-15-5D-52-CF-FF");
        assert_eq!(network.ipams.len(), 1);
        assert_eq!(network.ipams[0].ipam_type, "Static");
        assert_eq!(network.ipams[0].subnets[0].ip_address_prefix, "192.168.1.0/24");
        assert_eq!(network.ipams[0].subnets[0].routes[0].next_hop, "192.168.1.1");
        assert_eq!(network.ipams[0].subnets[0].routes[0].destination_prefix, "0.0.0.0/0");
        assert_eq!(network.schema_version.major, 2);
        assert_eq!(network.schema_version.minor, 0);
    }

    #[test]
    fn test_overlay_network_is_deterministic() {
        assert_eq!(overlay_network("vnet"), overlay_network("vnet"));
    }
}
