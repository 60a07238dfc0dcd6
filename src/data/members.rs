//! Member index construction from the members resource

use serde::Deserialize;
use serde_json::Value;

use super::{Member, MemberIndex, PayloadError};

/// Response from the members endpoint
#[derive(Debug, Deserialize)]
struct MembersResponse {
    results: Vec<MemberRecord>,
}

/// Wrapper object around each member in `results`
#[derive(Debug, Deserialize)]
struct MemberRecord {
    member: Member,
}

/// Builds a `pId -> fullName` lookup from a raw members payload
///
/// Members sharing a `pId` overwrite each other; the last one in payload
/// order wins.
///
/// # Errors
/// Returns `PayloadError::Members` if `results` is missing or any record
/// lacks `member.pId` or `member.fullName`.
pub fn build_member_index(payload: &Value) -> Result<MemberIndex, PayloadError> {
    let response = MembersResponse::deserialize(payload).map_err(PayloadError::Members)?;

    Ok(response
        .results
        .into_iter()
        .map(|record| (record.member.p_id, record.member.full_name))
        .collect())
}
