use crate::error::SchedError;
use chrono::{NaiveTime, Timelike};

/// Minutes depuis minuit pour une heure `HH:MM` (24h).
pub fn parse_minutes(raw: &str) -> Result<i64, SchedError> {
    let t = NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| SchedError::InvalidTimeFormat(raw.to_string()))?;
    Ok(i64::from(t.num_seconds_from_midnight() / 60))
}

/// Durée en minutes, sans rebouclage à minuit : `end <= start` donne 0 ou
/// une valeur négative.
pub fn shift_minutes(start_time: &str, end_time: &str) -> Result<i64, SchedError> {
    Ok(parse_minutes(end_time)? - parse_minutes(start_time)?)
}

/// Durée d'un créneau en heures (fractionnaires : 30 min → 0.5).
pub fn compute_shift_duration(start_time: &str, end_time: &str) -> Result<f64, SchedError> {
    Ok(shift_minutes(start_time, end_time)? as f64 / 60.0)
}
