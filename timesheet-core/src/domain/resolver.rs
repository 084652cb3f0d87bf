use tracing::warn;

use super::models::{ClientDetails, EmployeeDetails};
use super::ReferenceData;

/// Derived fields for an employee name, or `None` when the name is not in
/// the loaded snapshot.
pub fn resolve_employee(reference: &ReferenceData, name: &str) -> Option<EmployeeDetails> {
    let details = reference.employee(name).map(EmployeeDetails::from);
    if details.is_none() && !name.is_empty() {
        warn!(name, "employee not found in reference data");
    }
    details
}

/// Derived fields for a client account, or `None` when the account is not
/// in the loaded snapshot.
pub fn resolve_client(reference: &ReferenceData, account: &str) -> Option<ClientDetails> {
    let details = reference.client(account).map(ClientDetails::from);
    if details.is_none() && !account.is_empty() {
        warn!(account, "client not found in reference data");
    }
    details
}
