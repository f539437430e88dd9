//! Task builder
//!
//! Provides fluent API for building tasks.

use super::{Payload, Task};
use crate::Result;
use serde::Serialize;

/// Task builder
///
/// # Examples
///
/// ```rust
/// use taskq::Task;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let task = Task::builder("emails")
///     .normalized_payload(r#"{ "to": "a@b.com", "subj": "hi" }"#)?
///     .build();
///
/// assert_eq!(task.payload(), br#"{"subj":"hi","to":"a@b.com"}"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TaskBuilder {
    task_type: String,
    payload: Vec<u8>,
}

impl TaskBuilder {
    /// Create a new task builder
    #[must_use]
    pub fn new(task_type: impl Into<String>) -> Self {
        Self {
            task_type: task_type.into(),
            payload: Vec::new(),
        }
    }

    /// Set payload from raw user input
    ///
    /// JSON objects are re-serialized in canonical form, everything else is
    /// kept verbatim. See [`Payload::parse`].
    pub fn normalized_payload(mut self, raw: impl AsRef<[u8]>) -> Result<Self> {
        self.payload = Payload::parse(raw).into_bytes()?;
        Ok(self)
    }

    /// Set payload by serializing a value as JSON
    pub fn json_payload<T: Serialize>(mut self, payload: &T) -> Result<Self> {
        self.payload = serde_json::to_vec(payload)?;
        Ok(self)
    }

    /// Set raw binary payload
    #[must_use]
    pub fn raw_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Build the task
    pub fn build(self) -> Task {
        Task::new(self.task_type, self.payload)
    }
}
