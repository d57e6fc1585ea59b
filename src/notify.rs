use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(
        variant: ToastVariant,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            variant,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Advisory message sink; the widget never depends on delivery.
pub trait NotificationSink {
    fn notify(&self, toast: Toast);
}

/// Invoked once per successful write so sibling views can reload.
pub trait RefreshHook {
    fn refresh(&self);
}

impl<F: Fn()> RefreshHook for F {
    fn refresh(&self) {
        self()
    }
}

/// Forwards toasts to tracing; the default sink for headless use.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Destructive => error!("{}: {}", toast.title, toast.description),
            ToastVariant::Default => info!("{}: {}", toast.title, toast.description),
        }
    }
}
