/// Diagnostics sink for the scan pipeline.
///
/// The CLI implements this by forwarding to tracing; embedders and tests can
/// implement their own. All methods have default no-op implementations.
pub trait Diagnostics {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn severe(&self, _message: &str) {}
}

/// No-op diagnostics sink for silent operation.
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {}
