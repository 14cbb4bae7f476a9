use std::collections::BTreeMap;
use std::time::Instant;

/// Cross-cutting logger for pipeline orchestration events.
///
/// Keeps use cases independent of where status output ends up (the `log`
/// crate, a test probe, nowhere).
pub trait PipelineLogger: Send {
    /// Record a named count or measurement (e.g. cues written, words split).
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Forwards messages to the `log` crate and reports collected metrics once
/// the run completes.
pub struct LogPipelineLogger {
    metrics: BTreeMap<String, f64>,
    start_time: Instant,
}

impl LogPipelineLogger {
    pub fn new() -> Self {
        Self {
            metrics: BTreeMap::new(),
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary, or `None` if no metrics were recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!("Subtitle summary ({elapsed_ms:.1}ms):")];
        for (name, value) in &self.metrics {
            lines.push(format!("  {name:10}: {value}"));
        }
        Some(lines.join("\n"))
    }
}

impl Default for LogPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn metric(&mut self, name: &str, value: f64) {
        *self.metrics.entry(name.to_string()).or_default() += value;
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
