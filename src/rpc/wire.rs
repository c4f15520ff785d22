//! Protobuf framing for CosmWasm smart queries.
//!
//! The node's ABCI query path `/cosmwasm.wasm.v1.Query/SmartContractState`
//! expects a two-field protobuf message (contract address, query bytes) and
//! answers with a single-field message holding the contract's JSON response.
//! These are the only frames this client speaks, so they are encoded by hand
//! rather than pulling in a protobuf toolchain.

use thiserror::Error;

/// ABCI query path for read-only smart-contract state queries.
pub const SMART_QUERY_PATH: &str = "/cosmwasm.wasm.v1.Query/SmartContractState";

const WIRE_VARINT: u8 = 0;
const WIRE_FIXED64: u8 = 1;
const WIRE_LEN_DELIMITED: u8 = 2;
const WIRE_FIXED32: u8 = 5;

/// Errors decoding a query response frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("response frame truncated")]
    Truncated,

    #[error("varint exceeds 64 bits")]
    VarintOverflow,

    #[error("unsupported wire type {0}")]
    UnsupportedWireType(u8),
}

/// Encode a `QuerySmartContractStateRequest`.
///
/// Field 1: bech32 contract address (string). Field 2: query payload (bytes).
pub fn encode_smart_query(contract_address: &str, query: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(contract_address.len() + query.len() + 8);
    buf.push(0x0a); // field 1, length-delimited
    put_varint(&mut buf, contract_address.len() as u64);
    buf.extend_from_slice(contract_address.as_bytes());
    buf.push(0x12); // field 2, length-delimited
    put_varint(&mut buf, query.len() as u64);
    buf.extend_from_slice(query);
    buf
}

/// Decode a `QuerySmartContractStateResponse`, returning the contract's
/// raw response bytes (field 1). Unknown fields are skipped.
pub fn decode_smart_response(frame: &[u8]) -> Result<Vec<u8>, WireError> {
    let mut pos = 0;
    while pos < frame.len() {
        let (tag, next) = get_varint(frame, pos)?;
        pos = next;
        let field = (tag >> 3) as u32;
        let wire_type = (tag & 0x07) as u8;

        if field == 1 && wire_type == WIRE_LEN_DELIMITED {
            let (len, next) = get_varint(frame, pos)?;
            let len = len as usize;
            let end = next.checked_add(len).ok_or(WireError::Truncated)?;
            if end > frame.len() {
                return Err(WireError::Truncated);
            }
            return Ok(frame[next..end].to_vec());
        }

        pos = skip_field(frame, pos, wire_type)?;
    }
    // An empty message is a valid encoding of an empty payload.
    Ok(Vec::new())
}

fn skip_field(frame: &[u8], pos: usize, wire_type: u8) -> Result<usize, WireError> {
    match wire_type {
        WIRE_VARINT => {
            let (_, next) = get_varint(frame, pos)?;
            Ok(next)
        }
        WIRE_FIXED64 => {
            let next = pos.checked_add(8).ok_or(WireError::Truncated)?;
            if next > frame.len() {
                return Err(WireError::Truncated);
            }
            Ok(next)
        }
        WIRE_LEN_DELIMITED => {
            let (len, next) = get_varint(frame, pos)?;
            let end = next.checked_add(len as usize).ok_or(WireError::Truncated)?;
            if end > frame.len() {
                return Err(WireError::Truncated);
            }
            Ok(end)
        }
        WIRE_FIXED32 => {
            let next = pos.checked_add(4).ok_or(WireError::Truncated)?;
            if next > frame.len() {
                return Err(WireError::Truncated);
            }
            Ok(next)
        }
        other => Err(WireError::UnsupportedWireType(other)),
    }
}

fn put_varint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

fn get_varint(frame: &[u8], mut pos: usize) -> Result<(u64, usize), WireError> {
    let mut value: u64 = 0;
    let mut shift = 0u32;
    loop {
        let byte = *frame.get(pos).ok_or(WireError::Truncated)?;
        pos += 1;
        if shift >= 64 {
            return Err(WireError::VarintOverflow);
        }
        value |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Ok((value, pos));
        }
        shift += 7;
    }
}
