use std::fmt;

/// Motif de refus d'une affectation (ce ne sont pas des erreurs : l'appelant
/// décide comment les afficher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    UnknownEmployee,
    UnknownShift,
    Duplicate,
    HourLimit(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UnknownEmployee => f.write_str("Employee does not exist"),
            Rejection::UnknownShift => f.write_str("Shift does not exist"),
            Rejection::Duplicate => f.write_str("Assignment already exists"),
            Rejection::HourLimit(reason) => write!(f, "Cannot assign: {reason}"),
        }
    }
}

/// Résultat d'une tentative d'affectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    Recorded,
    Rejected(Rejection),
}

impl AssignOutcome {
    pub fn success(&self) -> bool {
        matches!(self, AssignOutcome::Recorded)
    }

    pub fn message(&self) -> String {
        match self {
            AssignOutcome::Recorded => "Shift Recorded".to_string(),
            AssignOutcome::Rejected(r) => r.to_string(),
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            AssignOutcome::Recorded => None,
            AssignOutcome::Rejected(r) => Some(r),
        }
    }
}
