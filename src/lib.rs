#![forbid(unsafe_code)]
//! Shiftplan — affectation d'employés à des créneaux, sans base de données.
//!
//! - Stockage fichiers (JSON), export/import CSV.
//! - Refus des affectations en double.
//! - Plafond d'heures par employé et par jour (`maxDailyHours`, 9 par défaut).
//! - Planning par employé trié chronologiquement.

pub mod directory;
pub mod duration;
pub mod engine;
pub mod error;
pub mod io;
pub mod model;
pub mod policy;
pub mod schedule;
pub mod storage;

pub use directory::{create_employee, list_employees, next_employee_id};
pub use duration::compute_shift_duration;
pub use engine::{AssignOutcome, AssignmentEngine, Rejection};
pub use error::SchedError;
pub use model::{Assignment, Config, Employee, EmployeeId, Shift, ShiftId};
pub use policy::{check_hour_limit, HourCheck};
pub use schedule::get_employee_schedule;
pub use storage::{JsonStore, Store};
