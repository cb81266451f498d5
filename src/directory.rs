use crate::error::SchedError;
use crate::model::{Employee, EmployeeId};
use crate::storage::Store;

pub fn list_employees<S: Store + ?Sized>(store: &S) -> Result<Vec<Employee>, SchedError> {
    Ok(store.load_employees()?)
}

/// Prochain identifiant `E###` : plus grand suffixe numérique existant + 1,
/// complété à 3 chiffres. Les identifiants hors format sont ignorés.
pub fn next_employee_id(employees: &[Employee]) -> EmployeeId {
    let max = employees
        .iter()
        .filter_map(|e| e.employee_id.as_str().strip_prefix('E'))
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|digits| digits.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    EmployeeId::new(format!("E{:03}", max + 1))
}

/// Crée un employé (nom et téléphone obligatoires) et persiste la collection.
pub fn create_employee<S: Store + ?Sized>(
    store: &S,
    name: &str,
    phone: &str,
) -> Result<Employee, SchedError> {
    let name = name.trim();
    let phone = phone.trim();
    if name.is_empty() {
        return Err(SchedError::MissingField("name"));
    }
    if phone.is_empty() {
        return Err(SchedError::MissingField("phone"));
    }

    let mut employees = store.load_employees()?;
    let employee = Employee {
        employee_id: next_employee_id(&employees),
        name: name.to_string(),
        phone: phone.to_string(),
    };
    employees.push(employee.clone());
    store.save_employees(&employees)?;
    tracing::info!(employee = %employee.employee_id, "employee created");
    Ok(employee)
}
