//! Bill decoding and filtering for the legislation resource

use serde::Deserialize;
use serde_json::Value;

use super::{parse_calendar_date, Bill, DateRange, MemberIndex, PayloadError};

/// Response from the legislation endpoint
#[derive(Debug, Deserialize)]
struct LegislationResponse {
    results: Vec<BillRecord>,
}

/// Wrapper object around each bill in `results`
#[derive(Debug, Deserialize)]
struct BillRecord {
    bill: Bill,
}

/// Decodes a raw legislation payload into bills, keeping payload order
///
/// # Errors
/// Returns `PayloadError::Legislation` if `results` is missing or any bill
/// lacks `billNo`, `lastUpdated` or a well-formed sponsor entry.
pub fn parse_bills(payload: &Value) -> Result<Vec<Bill>, PayloadError> {
    let response = LegislationResponse::deserialize(payload).map_err(PayloadError::Legislation)?;
    Ok(response.results.into_iter().map(|record| record.bill).collect())
}

/// Selects the bills sponsored by the member `pid`
///
/// The member's display name is looked up in `index` and compared, exactly
/// and case-sensitively, against each sponsor's `showAs`. An unknown `pid`
/// yields no bills. Members sharing a display name cannot be told apart.
pub fn filter_by_sponsor<'a>(pid: &str, bills: &'a [Bill], index: &MemberIndex) -> Vec<&'a Bill> {
    let Some(name) = index.get(pid) else {
        return Vec::new();
    };

    bills
        .iter()
        .filter(|bill| bill.sponsor_names().any(|sponsor| sponsor == name.as_str()))
        .collect()
}

/// Selects the bills whose `lastUpdated` date lies within `range`, inclusive
///
/// # Errors
/// Returns `PayloadError::LastUpdated` for the first bill whose date cannot
/// be parsed; no partial result is produced.
pub fn filter_by_last_updated<'a>(
    range: &DateRange,
    bills: &'a [Bill],
) -> Result<Vec<&'a Bill>, PayloadError> {
    let mut selected = Vec::new();

    for bill in bills {
        let last_updated =
            parse_calendar_date(&bill.last_updated).ok_or_else(|| PayloadError::LastUpdated {
                bill_no: bill.bill_no.clone(),
                value: bill.last_updated.clone(),
            })?;

        if range.contains(last_updated) {
            selected.push(bill);
        }
    }

    Ok(selected)
}
