//! Typed entrypoints for the contracts this client queries.
//!
//! Each contract interface is a sum type with one variant per entrypoint,
//! serialized to the externally-tagged snake_case JSON CosmWasm contracts
//! expect. Building a payload that serializes to anything else is a compile
//! error, which catches malformed queries before the network hop.

use serde::{Deserialize, Serialize};

/// ArchID name-registry contract on Archway mainnet.
pub const REGISTRY_CONTRACT: &str =
    "archway1275jwjpktae4y4y0cdq274a2m0jnpekhttnfuljm6n59wnpyd62qppqxq0";

/// ArchID CW721 token contract on Archway mainnet.
pub const CW721_CONTRACT: &str =
    "archway1cf5rq0amcl5m2flqrtl4gw2mdl3zdec9vlp5hfa9hgxlwnmrlazsdycu4l";

/// Read-only entrypoints of the name-registry contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryQuery {
    /// Look up the registration record for a name (e.g., "archid.arch").
    ResolveRecord { name: String },
}

impl RegistryQuery {
    pub fn resolve_record(name: impl Into<String>) -> Self {
        Self::ResolveRecord { name: name.into() }
    }
}

/// Read-only entrypoints of the CW721 token contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cw721Query {
    /// Metadata for one token id.
    NftInfo { token_id: String },
}

impl Cw721Query {
    pub fn nft_info(token_id: impl Into<String>) -> Self {
        Self::NftInfo {
            token_id: token_id.into(),
        }
    }
}

/// Typed view over a successful `resolve_record` response.
///
/// The raw JSON remains the canonical result; this decode is convenience
/// for callers that want fields instead of a value tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResolveRecordResponse {
    #[serde(default)]
    pub resolver: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub expiration: Option<u64>,
}

/// Typed view over a successful `nft_info` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NftInfoResponse {
    #[serde(default)]
    pub token_uri: Option<String>,

    #[serde(default)]
    pub extension: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_record_wire_shape() {
        let payload = RegistryQuery::resolve_record("archid.arch");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"resolve_record": {"name": "archid.arch"}})
        );
    }

    #[test]
    fn test_nft_info_wire_shape() {
        let payload = Cw721Query::nft_info("arsalaan.arch");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"nft_info": {"token_id": "arsalaan.arch"}})
        );
    }

    #[test]
    fn test_resolve_record_response_decodes() {
        let raw = serde_json::json!({
            "resolver": "archway1resolver",
            "address": "archway1owner",
            "expiration": 1735689600u64
        });
        let decoded: ResolveRecordResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(decoded.address.as_deref(), Some("archway1owner"));
        assert_eq!(decoded.expiration, Some(1735689600));
    }

    #[test]
    fn test_nft_info_response_tolerates_missing_fields() {
        let decoded: NftInfoResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(decoded.token_uri.is_none());
        assert!(decoded.extension.is_null());
    }
}
