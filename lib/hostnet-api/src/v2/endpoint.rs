use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::SchemaVersion;

/// HostEndpoint describes a virtual network interface attached to exactly
/// one HostNetwork.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostEndpoint {
    /// Endpoint identifier
    pub id: String,

    /// Human-readable endpoint name
    pub name: String,

    /// Identifier of the owning network
    pub host_network: String,

    pub ip_configurations: Vec<IpConfiguration>,

    /// Dash-separated MAC address assigned from the network's pool
    pub mac_address: String,

    pub flags: EndpointFlags,

    pub schema_version: SchemaVersion,

    pub health: EndpointHealth,
}

/// IP address assignment on an endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpConfiguration {
    pub ip_address: String,
    pub prefix_length: u8,
}

/// Health report for an endpoint, empty state when unreported
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointHealth {
    pub state: String,
}

bitflags! {
    /// Behavior flags on an endpoint
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EndpointFlags: u32 {
        /// Endpoint lives on another host and is reached via the overlay
        const REMOTE_ENDPOINT = 1;
    }
}

// The wire encodes flag sets as their raw bit value.
impl Serialize for EndpointFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for EndpointFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_bits_retain(u32::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_zero_value() {
        let ep = HostEndpoint::default();
        assert!(ep.id.is_empty());
        assert!(ep.host_network.is_empty());
        assert_eq!(ep.flags, EndpointFlags::empty());
        assert!(ep.health.state.is_empty());
    }

    #[test]
    fn test_endpoint_wire_casing() {
        let ep = HostEndpoint {
            id: "ep1".to_string(),
            name: "alpha".to_string(),
            host_network: "net1".to_string(),
            ip_configurations: vec![IpConfiguration {
                ip_address: "192.168.1.10".to_string(),
                prefix_length: 24,
            }],
            mac_address: "00-15-5D-52-C0-01".to_string(),
            flags: EndpointFlags::REMOTE_ENDPOINT,
            schema_version: SchemaVersion::current(),
            health: EndpointHealth {
                state: "Ok".to_string(),
            },
        };

        let json = serde_json::to_value(&ep).unwrap();
        assert_eq!(json["HostNetwork"], "net1");
        assert_eq!(json["IpConfigurations"][0]["IpAddress"], "192.168.1.10");
        assert_eq!(json["IpConfigurations"][0]["PrefixLength"], 24);
        assert_eq!(json["MacAddress"], "00-15-5D-52-C0-01");
        // Flags go out as raw bits, not names
        assert_eq!(json["Flags"], 1);
        assert_eq!(json["Health"]["State"], "Ok");
    }

    #[test]
    fn test_flags_roundtrip() {
        let flags = EndpointFlags::REMOTE_ENDPOINT;
        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, "1");
        let back: EndpointFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, flags);
    }
}
