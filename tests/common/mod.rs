#![allow(dead_code)]
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

pub fn write(dir: &Path, file: &str, value: Value) {
    fs::write(dir.join(file), serde_json::to_vec_pretty(&value).unwrap()).unwrap();
}

pub fn shift(id: &str, date: &str, start: &str, end: &str) -> Value {
    json!({ "shiftId": id, "date": date, "startTime": start, "endTime": end })
}

/// Données de base : deux employés, quelques créneaux, plafond à 8h.
pub fn fixture() -> TempDir {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "employees.json",
        json!([
            { "employeeId": "E001", "name": "Alice Martin", "phone": "555-0101" },
            { "employeeId": "E002", "name": "Bob Chen", "phone": "555-0102" }
        ]),
    );
    write(
        dir.path(),
        "shifts.json",
        json!([
            shift("S1", "2024-01-10", "08:00", "14:00"),
            shift("S2", "2024-01-10", "15:00", "18:00"),
            shift("S3", "2024-01-10", "15:00", "17:00"),
            shift("S4", "2024-01-11", "09:00", "17:00"),
            shift("A", "2024-02-02", "09:00", "12:00"),
            shift("B", "2024-02-01", "10:00", "12:00"),
            shift("C", "2024-02-01", "08:00", "09:30")
        ]),
    );
    write(dir.path(), "config.json", json!({ "maxDailyHours": 8 }));
    dir
}

pub fn read_assignments(dir: &Path) -> Value {
    let data = fs::read(dir.join("assignments.json")).unwrap();
    serde_json::from_slice(&data).unwrap()
}
