//! Plafond d'heures journalier par employé.

use crate::duration::shift_minutes;
use crate::error::SchedError;
use crate::model::{Assignment, Config, EmployeeId, Shift, ShiftId, ShiftIndex};
use crate::storage::Store;

/// Décision du contrôle d'heures.
#[derive(Debug, Clone, PartialEq)]
pub enum HourCheck {
    Allowed,
    Denied { reason: String },
}

impl HourCheck {
    pub fn allowed(&self) -> bool {
        matches!(self, HourCheck::Allowed)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            HourCheck::Allowed => None,
            HourCheck::Denied { reason } => Some(reason),
        }
    }
}

/// Vérifie que l'ajout de `shift_id` ne fait pas dépasser le plafond
/// journalier de `employee_id` à la date du créneau.
pub fn check_hour_limit<S: Store + ?Sized>(
    store: &S,
    employee_id: &EmployeeId,
    shift_id: &ShiftId,
) -> Result<HourCheck, SchedError> {
    let config = store.load_config()?;
    let shifts = store.load_shifts()?;
    let assignments = store.load_assignments()?;
    evaluate(&config, &shifts, &assignments, employee_id, shift_id)
}

/// Même contrôle que [`check_hour_limit`], sur des collections déjà chargées.
pub fn evaluate(
    config: &Config,
    shifts: &[Shift],
    assignments: &[Assignment],
    employee_id: &EmployeeId,
    shift_id: &ShiftId,
) -> Result<HourCheck, SchedError> {
    let max_hours = config.effective_max_daily_hours();
    if config.max_daily_hours.is_some() && config.configured_max_daily_hours().is_none() {
        tracing::warn!(
            raw = ?config.max_daily_hours,
            fallback = max_hours,
            "invalid maxDailyHours in config, using default"
        );
    }

    let index = ShiftIndex::new(shifts);
    let Some(candidate) = index.get(shift_id) else {
        return Ok(HourCheck::Denied {
            reason: "Shift does not exist".to_string(),
        });
    };

    let shift = shift_minutes(&candidate.start_time, &candidate.end_time)?;
    let current = minutes_on_date(&index, assignments, employee_id, &candidate.date)?;
    // somme en minutes entières, une seule conversion en heures
    let total_hours = (current + shift) as f64 / 60.0;

    tracing::debug!(
        employee = %employee_id,
        date = %candidate.date,
        current_hours = current as f64 / 60.0,
        shift_hours = shift as f64 / 60.0,
        max_hours,
        "hour limit check"
    );

    if total_hours > max_hours {
        return Ok(HourCheck::Denied {
            reason: format!("Assignment would exceed daily limit of {max_hours} hours"),
        });
    }
    Ok(HourCheck::Allowed)
}

/// Heures déjà affectées à `employee_id` sur `date`.
pub fn hours_on_date(
    assignments: &[Assignment],
    shifts: &[Shift],
    employee_id: &EmployeeId,
    date: &str,
) -> Result<f64, SchedError> {
    let index = ShiftIndex::new(shifts);
    Ok(minutes_on_date(&index, assignments, employee_id, date)? as f64 / 60.0)
}

fn minutes_on_date(
    index: &ShiftIndex<'_>,
    assignments: &[Assignment],
    employee_id: &EmployeeId,
    date: &str,
) -> Result<i64, SchedError> {
    let mut total = 0i64;
    for a in assignments.iter().filter(|a| &a.employee_id == employee_id) {
        if let Some(s) = index.get(&a.shift_id).filter(|s| s.date == date) {
            total += shift_minutes(&s.start_time, &s.end_time)?;
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Shift> {
        vec![
            Shift::new("M", "2024-01-10", "06:00", "12:30"),
            Shift::new("N", "2024-01-10", "13:00", "14:30"),
            Shift::new("O", "2024-01-11", "06:00", "12:30"),
        ]
    }

    fn assigned(pairs: &[(&str, &str)]) -> Vec<Assignment> {
        pairs
            .iter()
            .map(|(e, s)| Assignment::new(EmployeeId::new(e), ShiftId::new(s)))
            .collect()
    }

    #[test]
    fn sums_only_same_date_and_employee() {
        let shifts = catalog();
        let assignments = assigned(&[("E1", "M"), ("E1", "O"), ("E2", "N"), ("E1", "GONE")]);
        let h = hours_on_date(&assignments, &shifts, &EmployeeId::new("E1"), "2024-01-10").unwrap();
        assert_eq!(h, 6.5);
    }

    #[test]
    fn fractional_limit_boundary() {
        let shifts = catalog();
        let assignments = assigned(&[("E1", "M")]);
        let e1 = EmployeeId::new("E1");

        let config = Config::with_max_daily_hours(8.0);
        let check = evaluate(&config, &shifts, &assignments, &e1, &ShiftId::new("N")).unwrap();
        assert!(check.allowed());

        let config = Config::with_max_daily_hours(7.5);
        let check = evaluate(&config, &shifts, &assignments, &e1, &ShiftId::new("N")).unwrap();
        assert_eq!(
            check.reason(),
            Some("Assignment would exceed daily limit of 7.5 hours")
        );
    }

    #[test]
    fn sum_equal_to_fractional_limit_is_allowed() {
        let e1 = EmployeeId::new("E1");
        let assignments = assigned(&[("E1", "P1")]);
        // P1 + 7 min tombe pile sur la limite
        for (limit, split, end) in [
            (8.2, "16:05", "16:12"),
            (7.7, "15:35", "15:42"),
            (7.2, "15:05", "15:12"),
        ] {
            let shifts = vec![
                Shift::new("P1", "2024-04-02", "08:00", split),
                Shift::new("P2", "2024-04-02", split, end),
            ];
            let config = Config::with_max_daily_hours(limit);
            let check = evaluate(&config, &shifts, &assignments, &e1, &ShiftId::new("P2")).unwrap();
            assert!(check.allowed(), "limit {limit}: {check:?}");
        }
    }

    #[test]
    fn reversed_shift_lowers_the_day_total() {
        let shifts = vec![
            Shift::new("M", "2024-01-10", "06:00", "12:30"),
            Shift::new("R", "2024-01-10", "23:00", "22:00"),
            Shift::new("N", "2024-01-10", "13:00", "15:30"),
        ];
        let e1 = EmployeeId::new("E1");
        let config = Config::with_max_daily_hours(8.0);

        // 6.5 + 2.5 > 8
        let only_m = assigned(&[("E1", "M")]);
        let check = evaluate(&config, &shifts, &only_m, &e1, &ShiftId::new("N")).unwrap();
        assert!(!check.allowed());

        // 6.5 - 1 + 2.5 == 8
        let both = assigned(&[("E1", "M"), ("E1", "R")]);
        assert_eq!(hours_on_date(&both, &shifts, &e1, "2024-01-10").unwrap(), 5.5);
        let check = evaluate(&config, &shifts, &both, &e1, &ShiftId::new("N")).unwrap();
        assert!(check.allowed());
    }

    #[test]
    fn corrupt_stored_time_is_an_error() {
        let shifts = vec![Shift::new("Z", "2024-01-10", "late", "12:00")];
        let err = evaluate(
            &Config::default(),
            &shifts,
            &[],
            &EmployeeId::new("E1"),
            &ShiftId::new("Z"),
        )
        .unwrap_err();
        assert!(matches!(err, SchedError::InvalidTimeFormat(_)));
    }
}
