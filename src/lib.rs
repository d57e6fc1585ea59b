pub mod client;
pub mod form;
pub mod models;
pub mod notify;
pub mod widget;

pub use client::{resolve_base_url, Backend, HttpBackend, SchemaResponse};
pub use models::{
    DailyRecord, FieldValue, FormData, FormEntry, InputWidget, Parameter, ParameterKind,
    RecordValue,
};
pub use notify::{LogSink, NotificationSink, RefreshHook, Toast, ToastVariant};
pub use widget::{DailyParameters, Phase};
