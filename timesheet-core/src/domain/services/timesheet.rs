use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use time::Date;
use tracing::{error, info, instrument, warn};

use crate::domain::{
    build_records,
    models::Notification,
    ports::{
        inbound::TimesheetService,
        outbound::{Notifier, ReferenceSource, TimesheetSink},
    },
    summarize, validate, FormSession, ReferenceData, ReferenceLoad, ReferenceLoadError,
    ReferenceTable, SubmitError, SubmitOutcome,
};

/// Implementation of the [`TimesheetService`] inbound port.
///
/// Reads reference tables from `R`, writes records to `W` and reports every
/// outcome to the user through `N`.
pub struct TimesheetServiceImpl<R, W, N> {
    source: Arc<R>,
    sink: Arc<W>,
    notifier: Arc<N>,
    in_flight: AtomicBool,
}

impl<R, W, N> TimesheetServiceImpl<R, W, N> {
    pub fn new(source: Arc<R>, sink: Arc<W>, notifier: Arc<N>) -> Self {
        Self {
            source,
            sink,
            notifier,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Held for the duration of one submission; clears the flag on drop.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[async_trait]
impl<R, W, N> TimesheetService for TimesheetServiceImpl<R, W, N>
where
    R: ReferenceSource,
    W: TimesheetSink,
    N: Notifier,
{
    #[instrument(skip(self))]
    async fn load_reference_data(&self) -> ReferenceLoad {
        let mut errors = Vec::new();

        let employees = match self.source.fetch_employees().await {
            Ok(employees) => employees,
            Err(source) => {
                errors.push(ReferenceLoadError {
                    table: ReferenceTable::Employees,
                    source,
                });
                Vec::new()
            }
        };
        let clients = match self.source.fetch_clients().await {
            Ok(clients) => clients,
            Err(source) => {
                errors.push(ReferenceLoadError {
                    table: ReferenceTable::Clients,
                    source,
                });
                Vec::new()
            }
        };

        for err in &errors {
            error!(table = %err.table, error = %err.source, "failed to load reference table");
            self.notifier.notify(Notification::destructive(
                "Error",
                format!("Failed to load {}", err.table),
            ));
        }
        info!(
            employees = employees.len(),
            clients = clients.len(),
            "reference data loaded"
        );

        ReferenceLoad {
            data: ReferenceData::new(employees, clients),
            errors,
        }
    }

    #[instrument(skip(self, session, reference), fields(rows = session.rows().len()))]
    async fn submit(
        &self,
        session: &FormSession,
        reference: &ReferenceData,
        today: Date,
    ) -> Result<SubmitOutcome, SubmitError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!("submit ignored, previous submission still in flight");
            return Err(SubmitError::InFlight);
        };

        let violations = validate(session);
        if !violations.is_empty() {
            self.notifier.notify(Notification::destructive(
                "Validation Error",
                summarize(&violations),
            ));
            return Err(SubmitError::Invalid(violations));
        }

        let records = build_records(session, reference, today);
        if let Err(err) = self.sink.insert_records(&records).await {
            error!(error = %err, "failed to insert timesheet records");
            let err = SubmitError::from(err);
            let description = match &err {
                SubmitError::Store(msg) => format!("Failed to submit timesheet: {msg}"),
                _ => "An unexpected error occurred".to_string(),
            };
            self.notifier
                .notify(Notification::destructive("Error", description));
            return Err(err);
        }

        let inserted = records.len();
        info!(inserted, "timesheet submitted");
        self.notifier.notify(Notification::info(
            "Success",
            format!("{inserted} time entries submitted successfully!"),
        ));
        Ok(SubmitOutcome { inserted })
    }
}
