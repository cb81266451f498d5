use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Plafond journalier appliqué quand la configuration est absente ou invalide.
pub const DEFAULT_MAX_DAILY_HOURS: f64 = 9.0;

/// Identifiant fort pour Employee (`E001`, `E002`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifiant fort pour Shift
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftId(String);

impl ShiftId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employé
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub name: String,
    pub phone: String,
}

/// Créneau de travail sur une date donnée.
///
/// `date` est au format `YYYY-MM-DD`, les heures en `HH:MM` (24h). Les champs
/// restent textuels : c'est le format persistant, et l'ordre lexicographique
/// correspond à l'ordre chronologique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub shift_id: ShiftId,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl Shift {
    pub fn new<I, D, S, E>(shift_id: I, date: D, start_time: S, end_time: E) -> Self
    where
        I: AsRef<str>,
        D: Into<String>,
        S: Into<String>,
        E: Into<String>,
    {
        Self {
            shift_id: ShiftId::new(shift_id),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// Lien persistant employé ↔ créneau. La paire est unique dans la collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub employee_id: EmployeeId,
    pub shift_id: ShiftId,
}

impl Assignment {
    pub fn new(employee_id: EmployeeId, shift_id: ShiftId) -> Self {
        Self {
            employee_id,
            shift_id,
        }
    }

    pub fn matches(&self, employee_id: &EmployeeId, shift_id: &ShiftId) -> bool {
        &self.employee_id == employee_id && &self.shift_id == shift_id
    }
}

/// Configuration (`config.json`).
///
/// `maxDailyHours` est gardé brut pour pouvoir détecter une valeur non
/// numérique ; voir [`Config::effective_max_daily_hours`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_daily_hours: Option<Value>,
}

impl Config {
    pub fn with_max_daily_hours(hours: f64) -> Self {
        Self {
            max_daily_hours: serde_json::Number::from_f64(hours).map(Value::Number),
        }
    }

    /// Valeur configurée si elle est exploitable : nombre (ou chaîne
    /// numérique) fini et strictement positif.
    pub fn configured_max_daily_hours(&self) -> Option<f64> {
        let raw = match &self.max_daily_hours {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        raw.filter(|h| h.is_finite() && *h > 0.0)
    }

    /// Plafond effectif, 9 par défaut.
    pub fn effective_max_daily_hours(&self) -> f64 {
        self.configured_max_daily_hours()
            .unwrap_or(DEFAULT_MAX_DAILY_HOURS)
    }
}

/// Index du catalogue de créneaux par identifiant. En cas de doublon, le
/// premier créneau rencontré l'emporte (comme une recherche linéaire).
#[derive(Debug, Default)]
pub struct ShiftIndex<'a> {
    by_id: HashMap<&'a ShiftId, &'a Shift>,
}

impl<'a> ShiftIndex<'a> {
    pub fn new(shifts: &'a [Shift]) -> Self {
        let mut by_id = HashMap::with_capacity(shifts.len());
        for s in shifts {
            by_id.entry(&s.shift_id).or_insert(s);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &ShiftId) -> Option<&'a Shift> {
        self.by_id.get(id).copied()
    }
}
