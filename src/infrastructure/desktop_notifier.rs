// Desktop notifier - OS toast dispatch via notify-rust
use crate::application::notifier::{NotificationRequest, NotificationSink};
use crate::domain::evaluation::Icon;
use anyhow::Context;
use notify_rust::Notification;
use std::path::PathBuf;

/// Icon file shipped for each selector, resolved against the configured
/// icon directory.
fn icon_file(icon: Icon) -> &'static str {
    match icon {
        Icon::Rain => "cloud-rain-solid.svg",
        Icon::Snow => "snowflake-solid.svg",
        Icon::Cold => "cold.svg",
        Icon::Sun => "sun-solid.svg",
    }
}

pub struct DesktopNotifier {
    app_id: String,
    icon_dir: PathBuf,
}

impl DesktopNotifier {
    pub fn new(app_id: String, icon_dir: PathBuf) -> Self {
        Self { app_id, icon_dir }
    }

    fn icon_path(&self, icon: Icon) -> PathBuf {
        self.icon_dir.join(icon_file(icon))
    }
}

impl NotificationSink for DesktopNotifier {
    fn dispatch(&self, request: &NotificationRequest) -> anyhow::Result<()> {
        // Whether the actions are rendered (and how clicks are serviced) is
        // up to the desktop environment; the More Info target is also logged
        // so it stays reachable from a terminal run.
        tracing::debug!(url = %request.more_info_url, "more info link");

        Notification::new()
            .appname(&self.app_id)
            .summary(&request.title)
            .body(&request.message)
            .icon(&self.icon_path(request.icon).to_string_lossy())
            .action("more-info", "More Info")
            .action("close", "Close")
            .show()
            .context("failed to push desktop notification")?;

        Ok(())
    }
}
