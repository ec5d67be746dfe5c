//! Range checks for Cachet status levels.
//!
//! Component status runs 1 (operational) through 4 (major outage); incident
//! status runs 0 (scheduled) through 4 (fixed). Values arrive as opaque
//! JSON and may be integers or strings carrying integers — hosts that parse
//! command lines hand over strings. Checks run after argument assembly and
//! always before any network traffic.

use serde_json::Value;

use crate::error::Error;

/// Fail unless `value` is an integer (or string integer) in 1..=4.
pub fn check_component_status(value: &Value) -> Result<(), Error> {
    let status = as_status_code(value)?;
    if !(1..=4).contains(&status) {
        return Err(Error::InvalidComponentStatus(status));
    }
    Ok(())
}

/// Fail unless `value` is an integer (or string integer) in 0..=4.
pub fn check_incident_status(value: &Value) -> Result<(), Error> {
    let status = as_status_code(value)?;
    if !(0..=4).contains(&status) {
        return Err(Error::InvalidIncidentStatus(status));
    }
    Ok(())
}

fn as_status_code(value: &Value) -> Result<i64, Error> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| Error::StatusNotNumeric(value.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::StatusNotNumeric(s.clone())),
        other => Err(Error::StatusNotNumeric(other.to_string())),
    }
}
