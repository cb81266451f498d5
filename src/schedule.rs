use crate::error::SchedError;
use crate::model::{Assignment, EmployeeId, Shift, ShiftIndex};
use crate::storage::Store;
use std::cmp::Ordering;

/// Planning d'un employé, trié chronologiquement (date puis heure de début).
///
/// Une affectation dont le créneau n'existe plus est ignorée. Aucun créneau →
/// vecteur vide.
pub fn get_employee_schedule<S: Store + ?Sized>(
    store: &S,
    employee_id: &str,
) -> Result<Vec<Shift>, SchedError> {
    let employee_id = EmployeeId::new(employee_id);
    let assignments = store.assignments_for(&employee_id)?;
    let shifts = store.load_shifts()?;
    Ok(project(&assignments, &shifts, &employee_id))
}

/// Projection pure : résout les affectations de `employee_id` puis trie.
pub fn project(
    assignments: &[Assignment],
    shifts: &[Shift],
    employee_id: &EmployeeId,
) -> Vec<Shift> {
    let index = ShiftIndex::new(shifts);
    let mut schedule: Vec<Shift> = assignments
        .iter()
        .filter(|a| &a.employee_id == employee_id)
        .filter_map(|a| {
            let found = index.get(&a.shift_id);
            if found.is_none() {
                tracing::warn!(
                    employee = %employee_id,
                    shift = %a.shift_id,
                    "assignment references missing shift, skipped"
                );
            }
            found.cloned()
        })
        .collect();
    schedule.sort_by(chronological);
    schedule
}

/// Ordre date puis heure de début ; équivalent à l'ordre lexicographique de
/// `date + startTime` pour les formats `YYYY-MM-DD` / `HH:MM`.
pub fn chronological(a: &Shift, b: &Shift) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.start_time.cmp(&b.start_time))
}
