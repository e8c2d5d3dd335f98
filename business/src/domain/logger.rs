/// Logging port injected into every use case.
///
/// Messages are plain sentences; adapters decide formatting and routing.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
