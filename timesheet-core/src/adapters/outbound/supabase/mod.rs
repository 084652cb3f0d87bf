//! Client for a hosted Postgres exposed through its PostgREST endpoint.

mod dto;

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::domain::{
    models::{Client as ClientAccount, Employee, TimesheetRecord},
    ports::outbound::{ReferenceSource, TimesheetSink},
    StoreError,
};

use dto::{ClientRow, EmployeeRow, ErrorBody, TimesheetInsert};

const EMPLOYEE_TABLE: &str = "employee";
const CLIENT_TABLE: &str = "Client";
const TIMESHEET_TABLE: &str = "Timesheet";

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: Client,
    rest_url: Url,
    api_key: String,
}

impl SupabaseClient {
    /// `project_url` is the project root, e.g. `https://xyz.supabase.co`.
    pub fn new(project_url: &str, api_key: impl Into<String>) -> Result<Self, url::ParseError> {
        let rest_url = Url::parse(&format!("{}/", project_url.trim_end_matches('/')))?
            .join("rest/v1/")?;

        Ok(Self {
            client: Client::new(),
            rest_url,
            api_key: api_key.into(),
        })
    }

    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        self.rest_url
            .join(table)
            .map_err(|e| StoreError::Transport(format!("invalid table url for {table}: {e}")))
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &[&str],
    ) -> Result<Vec<T>, StoreError> {
        let mut url = self.table_url(table)?;
        url.query_pairs_mut()
            .append_pair("select", &select_clause(columns));

        let resp = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let resp = check_status(resp).await?;

        resp.json::<Vec<T>>().await.map_err(|e| {
            StoreError::Parsing(format!("Failed to parse {table} rows as JSON: {e}"))
        })
    }

    async fn insert_rows<T: Serialize + Sync>(
        &self,
        table: &str,
        rows: &[T],
    ) -> Result<(), StoreError> {
        let url = self.table_url(table)?;

        let resp = self
            .client
            .post(url)
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        check_status(resp).await?;

        Ok(())
    }
}

/// PostgREST select list. Column names with spaces must be quoted.
fn select_clause(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| {
            if c.contains(' ') {
                format!("\"{c}\"")
            } else {
                c.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

async fn check_status(resp: Response) -> Result<Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(error_from_response(status, &body))
}

fn error_from_response(status: StatusCode, body: &str) -> StoreError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return StoreError::Unauthorized;
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => StoreError::Rejected(err.message),
        Err(_) if body.trim().is_empty() => StoreError::Rejected(status.to_string()),
        Err(_) => StoreError::Rejected(body.trim().to_string()),
    }
}

#[async_trait]
impl ReferenceSource for SupabaseClient {
    #[instrument(skip(self))]
    async fn fetch_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let rows: Vec<EmployeeRow> = self
            .fetch_rows(EMPLOYEE_TABLE, EmployeeRow::COLUMNS)
            .await?;
        let total = rows.len();
        let employees: Vec<Employee> = rows
            .into_iter()
            .filter_map(EmployeeRow::into_domain)
            .collect();
        debug!(total, kept = employees.len(), "fetched employees");
        Ok(employees)
    }

    #[instrument(skip(self))]
    async fn fetch_clients(&self) -> Result<Vec<ClientAccount>, StoreError> {
        let rows: Vec<ClientRow> = self.fetch_rows(CLIENT_TABLE, ClientRow::COLUMNS).await?;
        let total = rows.len();
        let clients: Vec<ClientAccount> = rows
            .into_iter()
            .filter_map(ClientRow::into_domain)
            .collect();
        debug!(total, kept = clients.len(), "fetched clients");
        Ok(clients)
    }
}

#[async_trait]
impl TimesheetSink for SupabaseClient {
    #[instrument(skip(self, records), fields(count = records.len()))]
    async fn insert_records(&self, records: &[TimesheetRecord]) -> Result<(), StoreError> {
        let rows: Vec<TimesheetInsert> = records.iter().map(TimesheetInsert::from).collect();
        self.insert_rows(TIMESHEET_TABLE, &rows).await
    }
}
