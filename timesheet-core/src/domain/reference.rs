use std::collections::HashMap;

use super::models::{Client, Employee};
use super::ReferenceLoadError;

/// Employee and client tables fetched once per form session.
///
/// Immutable after construction. When a key appears more than once, the
/// first row wins.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    employees: Vec<Employee>,
    clients: Vec<Client>,
    employee_index: HashMap<String, usize>,
    client_index: HashMap<String, usize>,
}

impl ReferenceData {
    pub fn new(employees: Vec<Employee>, clients: Vec<Client>) -> Self {
        let mut employee_index = HashMap::with_capacity(employees.len());
        for (i, employee) in employees.iter().enumerate() {
            employee_index.entry(employee.name.clone()).or_insert(i);
        }
        let mut client_index = HashMap::with_capacity(clients.len());
        for (i, client) in clients.iter().enumerate() {
            client_index.entry(client.account.clone()).or_insert(i);
        }

        Self {
            employees,
            clients,
            employee_index,
            client_index,
        }
    }

    /// Employees in the order the store returned them.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Clients in the order the store returned them.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn employee(&self, name: &str) -> Option<&Employee> {
        self.employee_index.get(name).map(|&i| &self.employees[i])
    }

    pub fn client(&self, account: &str) -> Option<&Client> {
        self.client_index.get(account).map(|&i| &self.clients[i])
    }
}

/// Result of loading both reference tables.
///
/// Each table loads independently; a failed table is empty here and its
/// error is listed in `errors`.
#[derive(Debug, Clone, Default)]
pub struct ReferenceLoad {
    pub data: ReferenceData,
    pub errors: Vec<ReferenceLoadError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_duplicate_wins() {
        let data = ReferenceData::new(
            vec![
                Employee::new("A. Singh").with_gpn(1001),
                Employee::new("A. Singh").with_gpn(2002),
            ],
            vec![],
        );

        assert_eq!(data.employee("A. Singh").and_then(|e| e.gpn), Some(1001));
        assert_eq!(data.employees().len(), 2);
    }

    #[test]
    fn lookups_are_exact() {
        let data = ReferenceData::new(vec![], vec![Client::new("Acme")]);

        assert!(data.client("Acme").is_some());
        assert!(data.client("acme").is_none());
        assert!(data.client("Acme ").is_none());
    }
}
