// File: src/sink.rs
// Purpose: Consumers of fully valid value records

use crate::config::SubmitConfig;
use crate::field::FormValues;
use tracing::{error, info};

/// Receives a value record once the whole form is valid.
///
/// Implemented for any `FnMut(&FormValues)` closure.
pub trait SubmitSink {
    fn submit(&mut self, values: &FormValues);
}

impl<F> SubmitSink for F
where
    F: FnMut(&FormValues),
{
    fn submit(&mut self, values: &FormValues) {
        self(values)
    }
}

/// Logs the submitted record as JSON
#[derive(Debug, Clone, Default)]
pub struct LogSink {
    pretty: bool,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SubmitConfig) -> Self {
        Self {
            pretty: config.pretty,
        }
    }

    /// The log line written for `values`
    pub fn format(&self, values: &FormValues) -> serde_json::Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(values)?
        } else {
            serde_json::to_string(values)?
        };
        Ok(format!("Form submitted: {}", json))
    }
}

impl SubmitSink for LogSink {
    fn submit(&mut self, values: &FormValues) {
        match self.format(values) {
            Ok(line) => info!("{}", line),
            Err(e) => error!("Form submitted but could not be serialized: {}", e),
        }
    }
}

/// Keeps every submitted record in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    submissions: Vec<FormValues>,
}

impl RecordingSink {
    pub fn submissions(&self) -> &[FormValues] {
        &self.submissions
    }

    pub fn last(&self) -> Option<&FormValues> {
        self.submissions.last()
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}

impl SubmitSink for RecordingSink {
    fn submit(&mut self, values: &FormValues) {
        self.submissions.push(values.clone());
    }
}
