mod types;

pub use types::{AssignOutcome, Rejection};

use crate::error::SchedError;
use crate::model::{Assignment, EmployeeId, ShiftId, ShiftIndex};
use crate::policy::{self, HourCheck};
use crate::storage::Store;
use std::sync::{Mutex, MutexGuard};

/// Moteur d'affectation : contrôle puis enregistre une paire (employé, créneau).
///
/// Toute la séquence lecture → contrôles → ajout → écriture se fait sous un
/// verrou interne ; partager le moteur (ex. derrière un `Arc`) ne perd donc
/// aucune mise à jour.
#[derive(Debug)]
pub struct AssignmentEngine<S> {
    store: S,
    lock: Mutex<()>,
}

impl<S: Store> AssignmentEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // le verrou ne protège aucune donnée : un poison est sans conséquence
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Affecte `employee_id` à `shift_id`. Contrôles dans l'ordre, arrêt au
    /// premier refus : employé, créneau, doublon, plafond d'heures. Un refus
    /// ne modifie jamais l'état persisté.
    pub fn assign_employee_to_shift(
        &self,
        employee_id: &str,
        shift_id: &str,
    ) -> Result<AssignOutcome, SchedError> {
        let employee_id = EmployeeId::new(employee_id);
        let shift_id = ShiftId::new(shift_id);
        let _guard = self.guard();

        let employees = self.store.load_employees()?;
        if !employees.iter().any(|e| e.employee_id == employee_id) {
            tracing::debug!(employee = %employee_id, "unknown employee");
            return Ok(AssignOutcome::Rejected(Rejection::UnknownEmployee));
        }

        let shifts = self.store.load_shifts()?;
        if ShiftIndex::new(&shifts).get(&shift_id).is_none() {
            tracing::debug!(shift = %shift_id, "unknown shift");
            return Ok(AssignOutcome::Rejected(Rejection::UnknownShift));
        }

        let mut assignments = self.store.load_assignments()?;
        if assignments.iter().any(|a| a.matches(&employee_id, &shift_id)) {
            tracing::debug!(employee = %employee_id, shift = %shift_id, "duplicate assignment");
            return Ok(AssignOutcome::Rejected(Rejection::Duplicate));
        }

        let config = self.store.load_config()?;
        if let HourCheck::Denied { reason } =
            policy::evaluate(&config, &shifts, &assignments, &employee_id, &shift_id)?
        {
            tracing::debug!(employee = %employee_id, shift = %shift_id, %reason, "hour limit");
            return Ok(AssignOutcome::Rejected(Rejection::HourLimit(reason)));
        }

        assignments.push(Assignment::new(employee_id.clone(), shift_id.clone()));
        self.store.save_assignments(&assignments)?;
        tracing::info!(employee = %employee_id, shift = %shift_id, "shift recorded");
        Ok(AssignOutcome::Recorded)
    }
}
