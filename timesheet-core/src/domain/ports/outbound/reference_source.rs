use async_trait::async_trait;

use crate::domain::{
    models::{Client, Employee},
    StoreError,
};

/// Outbound port for the employee and client reference tables.
#[async_trait]
pub trait ReferenceSource: Send + Sync + 'static {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, StoreError>;

    async fn fetch_clients(&self) -> Result<Vec<Client>, StoreError>;
}
