use std::time::Duration;
use stowage_storage::OutputKind;

/// Monitoring sink for per-attempt upload outcomes.
///
/// Fire-and-forget contract: implementations must return promptly and must
/// never fail, since outcome reporting can never change an upload's result.
pub trait UploadReporter: Send + Sync {
    /// A primary upload succeeded
    fn record_success(&self, kind: OutputKind, elapsed: Duration);

    /// A primary upload failed
    fn record_failure(&self, kind: OutputKind, elapsed: Duration);

    /// A file landed on the backup destination
    fn record_backup_write(&self, kind: OutputKind);
}

/// Reporter that emits structured tracing events
#[derive(Debug, Default)]
pub struct TracingReporter;

impl UploadReporter for TracingReporter {
    fn record_success(&self, kind: OutputKind, elapsed: Duration) {
        tracing::info!(
            kind = %kind,
            elapsed_ms = elapsed.as_millis() as u64,
            "upload succeeded"
        );
    }

    fn record_failure(&self, kind: OutputKind, elapsed: Duration) {
        tracing::warn!(
            kind = %kind,
            elapsed_ms = elapsed.as_millis() as u64,
            "upload failed"
        );
    }

    fn record_backup_write(&self, kind: OutputKind) {
        tracing::warn!(kind = %kind, "wrote to backup storage");
    }
}
