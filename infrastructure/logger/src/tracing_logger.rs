use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing` under a single target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "pages_gate", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "pages_gate", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "pages_gate", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "pages_gate", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_be_usable_as_logger_port() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        logger.info("info line");
        logger.warn("warn line");
        logger.error("error line");
        logger.debug("debug line");
    }
}
