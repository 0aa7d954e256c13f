use crate::{
    error::WireError,
    request::{reindex::ReindexRequest, update_by_query::UpdateByQueryRequest},
    response::{BulkByScrollResponse, ReindexResponse},
};
use serde::{Deserialize, Serialize};

/// Version of the envelope layout and message schema this build speaks.
pub const SCHEMA_VERSION: u16 = 1;

/// Every message that crosses the wire, requests and responses alike.
///
/// One codec handles all four; the tag travels inside the body so peers
/// can dispatch without peeking at payload fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireMessage {
    ReindexRequest(ReindexRequest),
    UpdateByQueryRequest(UpdateByQueryRequest),
    BulkByScrollResponse(BulkByScrollResponse),
    ReindexResponse(ReindexResponse),
}

impl From<ReindexRequest> for WireMessage {
    fn from(request: ReindexRequest) -> Self {
        WireMessage::ReindexRequest(request)
    }
}

impl From<UpdateByQueryRequest> for WireMessage {
    fn from(request: UpdateByQueryRequest) -> Self {
        WireMessage::UpdateByQueryRequest(request)
    }
}

impl From<BulkByScrollResponse> for WireMessage {
    fn from(response: BulkByScrollResponse) -> Self {
        WireMessage::BulkByScrollResponse(response)
    }
}

impl From<ReindexResponse> for WireMessage {
    fn from(response: ReindexResponse) -> Self {
        WireMessage::ReindexResponse(response)
    }
}

/// Encode a message as a schema-versioned buffer.
///
/// Layout: little-endian `u16` schema version, then the JSON body. Record
/// bodies and query filters are schemaless `serde_json::Value`s, which
/// rules out non-self-describing codecs for the body.
pub fn encode(message: &WireMessage) -> Result<Vec<u8>, WireError> {
    let body = serde_json::to_vec(message).map_err(WireError::Encode)?;
    let mut buf = Vec::with_capacity(2 + body.len());
    buf.extend_from_slice(&SCHEMA_VERSION.to_le_bytes());
    buf.extend_from_slice(&body);
    Ok(buf)
}

/// Decode a buffer produced by [`encode`], refusing foreign schema versions.
pub fn decode(bytes: &[u8]) -> Result<WireMessage, WireError> {
    if bytes.len() < 2 {
        return Err(WireError::Truncated(bytes.len()));
    }
    let (header, body) = bytes.split_at(2);
    let found = u16::from_le_bytes([header[0], header[1]]);
    if found != SCHEMA_VERSION {
        return Err(WireError::UnsupportedSchema {
            found,
            expected: SCHEMA_VERSION,
        });
    }
    serde_json::from_slice(body).map_err(WireError::Decode)
}
