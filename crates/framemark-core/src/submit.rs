//! Submission of finished annotations to a downstream sink.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

/// Submission errors raised by a sink.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Sink rejected submission: {0}")]
    Rejected(String),
}

/// Ordered vertex lists of every committed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionPayload {
    pub shapes: Vec<Vec<Point>>,
}

impl SubmissionPayload {
    /// Number of shapes in the payload.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the payload carries no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// User-facing result of a submit action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// The payload was delivered.
    Success { count: usize },
    /// Nothing was submitted.
    Warning { message: String },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success { .. })
    }
}

/// Receiver of submitted annotations (network client, log, file).
pub trait SubmissionSink {
    /// Deliver a payload.
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<(), SubmitError>;
}

/// Sink that logs each payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        let json = serde_json::to_string(payload)?;
        log::info!("Submitted {} shapes: {}", payload.len(), json);
        Ok(())
    }
}

/// Sink that writes one JSON document per line to a writer.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmissionSink for JsonSink<W> {
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        serde_json::to_writer(&mut self.writer, payload)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory sink that keeps every payload.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    payloads: Vec<SubmissionPayload>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads received so far, oldest first.
    pub fn payloads(&self) -> &[SubmissionPayload] {
        &self.payloads
    }
}

impl SubmissionSink for MemorySink {
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        self.payloads.push(payload.clone());
        Ok(())
    }
}
