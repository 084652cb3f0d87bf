//! In-memory store used by `dev` mode and tests.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::{
    models::{Client, Employee, Notification, TimesheetRecord},
    ports::outbound::{Notifier, ReferenceSource, TimesheetSink},
    StoreError,
};

/// Reference tables and an inserted-record log held in memory.
///
/// Each operation can be made to fail with a fixed [`StoreError`].
#[derive(Clone, Default)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
    clients: Vec<Client>,
    records: Arc<RwLock<Vec<TimesheetRecord>>>,
    employees_error: Option<StoreError>,
    clients_error: Option<StoreError>,
    insert_error: Option<StoreError>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A small set of employees and clients for trying the form out.
    pub fn seeded() -> Self {
        Self::new()
            .with_employees(vec![
                Employee::new("A. Singh")
                    .with_gpn(1001)
                    .with_designation("Associate")
                    .with_manager("Indirect Tax"),
                Employee::new("R. Menon")
                    .with_gpn(1002)
                    .with_designation("Senior Associate")
                    .with_manager("Direct Tax"),
                Employee::new("S. Kapoor")
                    .with_gpn(1003)
                    .with_designation("Manager")
                    .with_manager("Transfer Pricing"),
                Employee::new("T. Nair").with_designation("Analyst"),
            ])
            .with_clients(vec![
                Client::new("Acme")
                    .with_partner("P. Rao")
                    .with_cad_manager("M. Iyer")
                    .with_complexity("High")
                    .with_location("Mumbai"),
                Client::new("Beta")
                    .with_partner("K. Shah")
                    .with_cad_manager("R. Das")
                    .with_complexity("Low")
                    .with_location("Pune"),
                Client::new("Globex Industries")
                    .with_partner("V. Bose")
                    .with_complexity("Medium")
                    .with_location("Bengaluru"),
                Client::new("Initech").with_location("Hyderabad"),
            ])
    }

    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    pub fn with_clients(mut self, clients: Vec<Client>) -> Self {
        self.clients = clients;
        self
    }

    pub fn failing_employees(mut self, err: StoreError) -> Self {
        self.employees_error = Some(err);
        self
    }

    pub fn failing_clients(mut self, err: StoreError) -> Self {
        self.clients_error = Some(err);
        self
    }

    pub fn failing_inserts(mut self, err: StoreError) -> Self {
        self.insert_error = Some(err);
        self
    }

    /// Every record inserted so far, in insertion order.
    pub fn records(&self) -> Vec<TimesheetRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ReferenceSource for InMemoryStore {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, StoreError> {
        match &self.employees_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.employees.clone()),
        }
    }

    async fn fetch_clients(&self) -> Result<Vec<Client>, StoreError> {
        match &self.clients_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.clients.clone()),
        }
    }
}

#[async_trait]
impl TimesheetSink for InMemoryStore {
    async fn insert_records(&self, records: &[TimesheetRecord]) -> Result<(), StoreError> {
        if let Some(err) = &self.insert_error {
            return Err(err.clone());
        }
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(records);
        Ok(())
    }
}

/// Notifier that keeps every notification for later inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
