use crate::pipeline::{Notice, Notifier};

const APP_NAME: &str = "SwatchLens";

pub fn send(body: impl Into<String>) {
    let body = body.into();
    if let Err(err) = notify_rust::Notification::new()
        .appname(APP_NAME)
        .summary(APP_NAME)
        .body(&body)
        .show()
    {
        tracing::warn!("system notification failed: {err}");
    }
}

/// Shows notices as desktop notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, notice: Notice) {
        tracing::info!(?notice, "showing notice");
        send(notice.message());
    }
}
