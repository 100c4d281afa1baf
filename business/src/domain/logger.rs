use std::fmt::Display;

/// Logging port injected into use cases and stores.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);

    /// Logs a recovered failure: the caller degrades to a fallback instead of propagating.
    fn recovered(&self, context: &str, error: &dyn Display) {
        self.warn(&format!("{} failed, using fallback: {}", context, error));
    }
}
