use assetdesk_core::{Notice, NoticeLevel, Notifier};

/// Notifier for headless runs: every notice becomes a log event.
///
/// Errors log at `error`, everything else at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => tracing::error!(target: "assetdesk::notice", "{}", notice.message),
            NoticeLevel::Success => {
                tracing::info!(target: "assetdesk::notice", kind = "success", "{}", notice.message)
            }
            NoticeLevel::Info => tracing::info!(target: "assetdesk::notice", kind = "info", "{}", notice.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn captured_lines(f: impl FnOnce()) -> Vec<serde_json::Value> {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = out.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn notices_become_log_events() {
        let notifier = TracingNotifier::new();
        let lines = captured_lines(|| {
            notifier.notify(Notice::error("Inventory is locked"));
            notifier.notify(Notice::success("Inventory marked as Done."));
        });

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["level"], "ERROR");
        assert_eq!(lines[0]["fields"]["message"], "Inventory is locked");
        assert_eq!(lines[1]["level"], "INFO");
        assert_eq!(lines[1]["target"], "assetdesk::notice");
        assert_eq!(lines[1]["fields"]["kind"], "success");
    }
}
