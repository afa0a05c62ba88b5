//! In-memory employee store.
//!
//! Backed by a concurrent map so request handlers can share one handle
//! without locking around the whole table. Nothing is persisted; the
//! directory lives and dies with the process.

use std::sync::Arc;

use dashmap::DashMap;

use crate::employees::types::Employee;
use crate::error::ApiError;

/// Shared handle to the in-memory employee directory.
#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    records: Arc<DashMap<u32, Employee>>,
}

impl EmployeeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with sample records, so the example routes
    /// answer out of the box.
    pub fn seeded() -> Self {
        let store = Self::new();
        for employee in sample_employees() {
            store.records.insert(employee.id, employee);
        }
        store
    }

    /// All employees, ordered by id.
    pub fn list(&self) -> Vec<Employee> {
        let mut employees: Vec<Employee> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        employees.sort_by_key(|e| e.id);
        employees
    }

    /// Look up one employee.
    pub fn get(&self, id: u32) -> Result<Employee, ApiError> {
        self.records
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(ApiError::NotFound {
                resource: "employee",
                id,
            })
    }

    /// Insert a new employee. Fails if the id is already taken.
    pub fn insert(&self, employee: Employee) -> Result<Employee, ApiError> {
        use dashmap::mapref::entry::Entry;

        match self.records.entry(employee.id) {
            Entry::Occupied(_) => Err(ApiError::Conflict {
                resource: "employee",
                id: employee.id,
            }),
            Entry::Vacant(slot) => {
                slot.insert(employee.clone());
                Ok(employee)
            }
        }
    }

    /// Replace an existing employee. Fails if the id is unknown.
    pub fn update(&self, id: u32, employee: Employee) -> Result<Employee, ApiError> {
        use dashmap::mapref::entry::Entry;

        match self.records.entry(id) {
            Entry::Occupied(mut slot) => {
                slot.insert(employee.clone());
                Ok(employee)
            }
            Entry::Vacant(_) => Err(ApiError::NotFound {
                resource: "employee",
                id,
            }),
        }
    }

    /// Remove an employee. Fails if the id is unknown.
    pub fn remove(&self, id: u32) -> Result<Employee, ApiError> {
        self.records
            .remove(&id)
            .map(|(_, employee)| employee)
            .ok_or(ApiError::NotFound {
                resource: "employee",
                id,
            })
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Sample records used to seed the store at startup.
fn sample_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "Ada Lovelace".to_string(),
            department: "Engineering".to_string(),
            age: 36,
        },
        Employee {
            id: 2,
            name: "Grace Hopper".to_string(),
            department: "Research".to_string(),
            age: 45,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: u32) -> Employee {
        Employee {
            id,
            name: "Test Person".to_string(),
            department: "Testing".to_string(),
            age: 30,
        }
    }

    #[test]
    fn insert_and_get() {
        let store = EmployeeStore::new();
        assert!(store.is_empty());

        store.insert(employee(1)).unwrap();
        assert_eq!(store.get(1).unwrap().id, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_duplicate_is_conflict() {
        let store = EmployeeStore::new();
        store.insert(employee(1)).unwrap();

        let err = store.insert(employee(1)).unwrap_err();
        assert!(matches!(err, ApiError::Conflict { id: 1, .. }));
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = EmployeeStore::new();
        let err = store.get(42).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { id: 42, .. }));
    }

    #[test]
    fn update_replaces_record() {
        let store = EmployeeStore::new();
        store.insert(employee(1)).unwrap();

        let mut updated = employee(1);
        updated.department = "Platform".to_string();
        store.update(1, updated).unwrap();

        assert_eq!(store.get(1).unwrap().department, "Platform");
    }

    #[test]
    fn update_missing_is_not_found() {
        let store = EmployeeStore::new();
        assert!(store.update(9, employee(9)).is_err());
    }

    #[test]
    fn remove_then_get_is_not_found() {
        let store = EmployeeStore::new();
        store.insert(employee(1)).unwrap();

        store.remove(1).unwrap();
        assert!(store.get(1).is_err());
        assert!(store.remove(1).is_err());
    }

    #[test]
    fn list_is_ordered_by_id() {
        let store = EmployeeStore::new();
        store.insert(employee(3)).unwrap();
        store.insert(employee(1)).unwrap();
        store.insert(employee(2)).unwrap();

        let ids: Vec<u32> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn seeded_store_has_sample_records() {
        let store = EmployeeStore::seeded();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().name, "Ada Lovelace");
    }
}
