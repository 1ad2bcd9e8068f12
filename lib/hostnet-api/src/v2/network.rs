use serde::{Deserialize, Serialize};

use super::SchemaVersion;

/// HostNetwork describes a virtual network managed by the host control plane.
///
/// Networks are query-only from a consumer's point of view: the service
/// synthesizes the document on demand, so no create/update schema exists here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostNetwork {
    /// Network identifier (GUID on the real host service)
    pub id: String,

    /// Human-readable network name
    pub name: String,

    /// Network driver type, e.g. "overlay" or "l2bridge"
    #[serde(rename = "Type")]
    pub network_type: String,

    /// MAC address pool endpoints are allocated from
    pub mac_pool: MacPool,

    /// IP address management blocks
    pub ipams: Vec<Ipam>,

    pub schema_version: SchemaVersion,
}

/// Pool of MAC address ranges available to a network
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MacPool {
    pub ranges: Vec<MacRange>,
}

/// Inclusive range of MAC addresses, dash-separated octets
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MacRange {
    pub start_mac_address: String,
    pub end_mac_address: String,
}

/// IP address management block: one addressing scheme with its subnets
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ipam {
    /// Allocation scheme, e.g. "Static" or "DHCP"
    #[serde(rename = "Type")]
    pub ipam_type: String,

    pub subnets: Vec<Subnet>,
}

/// Subnet within an IPAM block
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subnet {
    /// CIDR prefix, e.g. "192.168.1.0/24"
    pub ip_address_prefix: String,

    pub routes: Vec<Route>,
}

/// Route advertised inside a subnet
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    pub next_hop: String,
    pub destination_prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_wire_casing() {
        let network = HostNetwork {
            id: "abc".to_string(),
            name: "test".to_string(),
            network_type: "overlay".to_string(),
            mac_pool: MacPool {
                ranges: vec![MacRange {
                    start_mac_address: "00-15-5D-52-C0-00".to_string(),
                    end_mac_address: "00-15-5D-52-CF-FF".to_string(),
                }],
            },
            ipams: Vec::new(),
            schema_version: SchemaVersion::current(),
        };

        let json = serde_json::to_value(&network).unwrap();
        assert_eq!(json["Id"], "abc");
        assert_eq!(json["Type"], "overlay");
        assert_eq!(json["MacPool"]["Ranges"][0]["StartMacAddress"], "00-15-5D-52-C0-00");
        assert_eq!(json["SchemaVersion"]["Major"], 2);
        assert_eq!(json["SchemaVersion"]["Minor"], 0);
    }

    #[test]
    fn test_route_wire_casing() {
        let route = Route {
            next_hop: "192.168.1.1".to_string(),
            destination_prefix: "0.0.0.0/0".to_string(),
        };
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["NextHop"], "192.168.1.1");
        assert_eq!(json["DestinationPrefix"], "0.0.0.0/0");
    }
}
