pub mod health;
pub mod trades;

use crate::{ApiError, Result};
use sbrest::SbResponse;
use serde_json::Value;

/// Unwrap a store response.
///
/// A null data field means the store rejected the call; it collapses
/// to a server error carrying the operation's fixed message.
pub fn rows_or_error(resp: SbResponse, msg: &str) -> Result<Vec<Value>> {
    resp.data
        .ok_or_else(|| ApiError::InternalServerError(msg.to_owned()))
}
