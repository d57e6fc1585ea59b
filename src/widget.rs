use crate::client::Backend;
use crate::form;
use crate::models::{DailyRecord, FieldValue, FormData, FormEntry, Parameter};
use crate::notify::{NotificationSink, RefreshHook, Toast, ToastVariant};
use chrono::NaiveDate;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

/// `Conflict` means the overwrite prompt is open and waiting on the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Conflict,
}

pub struct DailyParameters<B, N, R> {
    backend: B,
    notifier: N,
    refresh: R,
    parameters: Vec<Parameter>,
    form: FormData,
    loading: bool,
    phase: Phase,
}

impl<B, N, R> DailyParameters<B, N, R>
where
    B: Backend,
    N: NotificationSink,
    R: RefreshHook,
{
    pub fn new(backend: B, notifier: N, refresh: R) -> Self {
        Self {
            backend,
            notifier,
            refresh,
            parameters: Vec::new(),
            form: FormData::default(),
            loading: false,
            phase: Phase::Idle,
        }
    }

    /// Fetches the parameter schema and resets the form entries to match
    /// it. A non-200 response leaves the schema empty with no notification.
    pub async fn load_parameters(&mut self) {
        self.loading = true;
        let response = self.backend.fetch_parameters().await;
        self.loading = false;

        if response.status != StatusCode::OK {
            debug!("parameter fetch returned {}", response.status);
            return;
        }

        self.form.entries = form::init_entries(&response.parameters);
        self.parameters = response.parameters;
        info!("loaded {} parameters", self.parameters.len());
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.form.date = date;
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<FieldValue>) {
        form::update_entry(&mut self.form.entries, id, value.into());
    }

    pub async fn submit(&mut self) {
        self.submit_record(false).await;
    }

    /// Resubmits the same date and data with the overwrite flag set. Only
    /// meaningful while the overwrite prompt is open.
    pub async fn confirm_overwrite(&mut self) {
        if self.phase != Phase::Conflict {
            return;
        }
        self.submit_record(true).await;
    }

    pub fn cancel_overwrite(&mut self) {
        if self.phase != Phase::Conflict {
            return;
        }
        self.phase = Phase::Idle;
        self.notifier
            .notify(Toast::new(ToastVariant::Default, "Ok!", "Data not overwritten"));
    }

    async fn submit_record(&mut self, overwrite: bool) {
        self.phase = Phase::Submitting;
        let record = DailyRecord {
            date: self.form.date,
            data: form::normalize(&self.parameters, &self.form.entries),
            overwrite,
        };

        let status = self.backend.submit_record(&record).await;
        debug!("daily record submit returned {status}");

        if status == StatusCode::BAD_REQUEST {
            self.phase = Phase::Conflict;
            return;
        }

        if status == StatusCode::OK {
            self.phase = Phase::Idle;
            self.refresh.refresh();
            self.notifier.notify(Toast::new(
                ToastVariant::Default,
                "Success",
                "Parameter added successfully",
            ));
            return;
        }

        warn!("daily record submit failed with {status}");
        self.phase = Phase::Idle;
        self.notifier.notify(Toast::new(
            ToastVariant::Destructive,
            "Error",
            "Failed to add parameters",
        ));
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn date(&self) -> NaiveDate {
        self.form.date
    }

    pub fn entries(&self) -> &[FormEntry] {
        &self.form.entries
    }

    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.form
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.value)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn prompt_open(&self) -> bool {
        self.phase == Phase::Conflict
    }
}
