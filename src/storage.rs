use crate::model::{Assignment, Config, Employee, EmployeeId, Shift, ShiftId};
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const EMPLOYEES_FILE: &str = "employees.json";
pub const SHIFTS_FILE: &str = "shifts.json";
pub const ASSIGNMENTS_FILE: &str = "assignments.json";
pub const CONFIG_FILE: &str = "config.json";

/// Accès aux collections persistées. Aucune validation métier ici.
pub trait Store {
    fn load_employees(&self) -> anyhow::Result<Vec<Employee>>;
    /// Sauvegarde de manière atomique.
    fn save_employees(&self, employees: &[Employee]) -> anyhow::Result<()>;

    fn load_shifts(&self) -> anyhow::Result<Vec<Shift>>;
    fn save_shifts(&self, shifts: &[Shift]) -> anyhow::Result<()>;

    fn load_assignments(&self) -> anyhow::Result<Vec<Assignment>>;
    fn save_assignments(&self, assignments: &[Assignment]) -> anyhow::Result<()>;

    fn load_config(&self) -> anyhow::Result<Config>;

    fn find_employee(&self, id: &EmployeeId) -> anyhow::Result<Option<Employee>> {
        Ok(self
            .load_employees()?
            .into_iter()
            .find(|e| &e.employee_id == id))
    }

    fn find_shift(&self, id: &ShiftId) -> anyhow::Result<Option<Shift>> {
        Ok(self.load_shifts()?.into_iter().find(|s| &s.shift_id == id))
    }

    fn assignment_exists(&self, employee: &EmployeeId, shift: &ShiftId) -> anyhow::Result<bool> {
        Ok(self
            .load_assignments()?
            .iter()
            .any(|a| a.matches(employee, shift)))
    }

    fn assignments_for(&self, employee: &EmployeeId) -> anyhow::Result<Vec<Assignment>> {
        let mut all = self.load_assignments()?;
        all.retain(|a| &a.employee_id == employee);
        Ok(all)
    }
}

/// Stockage fichiers : un JSON par collection dans un répertoire de données.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn open<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if dir.exists() && !dir.is_dir() {
            anyhow::bail!("{} is not a directory", dir.display());
        }
        Ok(Self { dir })
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Fichier absent → `None` ; illisible ou JSON invalide → erreur.
    fn read_json<T: DeserializeOwned>(&self, file: &str) -> anyhow::Result<Option<T>> {
        let path = self.path(file);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "file missing, using empty value");
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        let value = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> anyhow::Result<()> {
        let path = self.path(file);
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;

        let mut json = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(b"    "));
        value
            .serialize(&mut ser)
            .with_context(|| format!("serializing {file}"))?;

        let mut tmp = NamedTempFile::new_in(&self.dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path)
            .with_context(|| format!("atomic rename to {}", path.display()))?;
        Ok(())
    }
}

impl Store for JsonStore {
    fn load_employees(&self) -> anyhow::Result<Vec<Employee>> {
        Ok(self.read_json(EMPLOYEES_FILE)?.unwrap_or_default())
    }

    fn save_employees(&self, employees: &[Employee]) -> anyhow::Result<()> {
        self.write_json(EMPLOYEES_FILE, employees)
    }

    fn load_shifts(&self) -> anyhow::Result<Vec<Shift>> {
        Ok(self.read_json(SHIFTS_FILE)?.unwrap_or_default())
    }

    fn save_shifts(&self, shifts: &[Shift]) -> anyhow::Result<()> {
        self.write_json(SHIFTS_FILE, shifts)
    }

    fn load_assignments(&self) -> anyhow::Result<Vec<Assignment>> {
        Ok(self.read_json(ASSIGNMENTS_FILE)?.unwrap_or_default())
    }

    fn save_assignments(&self, assignments: &[Assignment]) -> anyhow::Result<()> {
        self.write_json(ASSIGNMENTS_FILE, assignments)
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        Ok(self.read_json(CONFIG_FILE)?.unwrap_or_default())
    }
}
