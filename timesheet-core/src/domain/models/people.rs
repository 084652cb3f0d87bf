/// An employee from the reference table. `name` is the lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    /// Numeric personnel identifier (GPN).
    pub gpn: Option<i64>,
    pub designation: Option<String>,
    /// Reporting manager, shown on the form as the employee's vertical.
    pub manager: Option<String>,
}

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gpn: None,
            designation: None,
            manager: None,
        }
    }

    pub fn with_gpn(mut self, gpn: i64) -> Self {
        self.gpn = Some(gpn);
        self
    }

    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }

    pub fn with_manager(mut self, manager: impl Into<String>) -> Self {
        self.manager = Some(manager.into());
        self
    }
}

/// A client account from the reference table. `account` is the lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub account: String,
    pub partner: Option<String>,
    pub cad_manager: Option<String>,
    pub complexity: Option<String>,
    pub location: Option<String>,
}

impl Client {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            partner: None,
            cad_manager: None,
            complexity: None,
            location: None,
        }
    }

    pub fn with_partner(mut self, partner: impl Into<String>) -> Self {
        self.partner = Some(partner.into());
        self
    }

    pub fn with_cad_manager(mut self, cad_manager: impl Into<String>) -> Self {
        self.cad_manager = Some(cad_manager.into());
        self
    }

    pub fn with_complexity(mut self, complexity: impl Into<String>) -> Self {
        self.complexity = Some(complexity.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Read-only fields derived from the selected employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    pub gpn: Option<i64>,
    pub designation: String,
    pub vertical: String,
}

impl From<&Employee> for EmployeeDetails {
    fn from(employee: &Employee) -> Self {
        Self {
            gpn: employee.gpn,
            designation: employee.designation.clone().unwrap_or_default(),
            vertical: employee.manager.clone().unwrap_or_default(),
        }
    }
}

/// Read-only fields derived from a row's client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDetails {
    pub partner: String,
    pub cad_manager: String,
    pub complexity: String,
    pub location: String,
}

impl From<&Client> for ClientDetails {
    fn from(client: &Client) -> Self {
        Self {
            partner: client.partner.clone().unwrap_or_default(),
            cad_manager: client.cad_manager.clone().unwrap_or_default(),
            complexity: client.complexity.clone().unwrap_or_default(),
            location: client.location.clone().unwrap_or_default(),
        }
    }
}
