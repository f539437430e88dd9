//! Task type definitions
//!
//! Provides the Task descriptor, its builder, and the record written to Redis on enqueue.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub mod builder;
pub mod payload;

pub use builder::TaskBuilder;
pub use payload::Payload;

/// Task status as stored in the task record
///
/// A producer only ever writes `pending`; later states belong to the broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Pending to be processed
    #[default]
    Pending,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
        }
    }
}

/// Task descriptor
///
/// A topic plus payload bytes. The destination queue is chosen when the
/// task is enqueued, not when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    task_type: String,
    payload: Vec<u8>,
}

impl Task {
    /// Create a task from a topic and already-encoded payload bytes
    pub fn new(task_type: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            task_type: task_type.into(),
            payload,
        }
    }

    /// Create a new task builder
    #[must_use]
    pub fn builder(task_type: impl Into<String>) -> TaskBuilder {
        TaskBuilder::new(task_type)
    }

    /// Build a task from a topic and a raw payload, normalizing JSON-object
    /// payloads.
    pub fn from_input(task_type: impl Into<String>, raw_payload: impl AsRef<[u8]>) -> Result<Self> {
        Ok(TaskBuilder::new(task_type)
            .normalized_payload(raw_payload)?
            .build())
    }

    /// Task type (topic)
    pub fn task_type(&self) -> &str {
        &self.task_type
    }

    /// Payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Check the task against the broker's acceptance rules
    pub fn validate(&self) -> Result<()> {
        if self.task_type.trim().is_empty() {
            return Err(Error::Validation("task type cannot be empty".into()));
        }
        Ok(())
    }
}

/// Task record stored under `taskq:task:<id>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMessage {
    /// Task ID (UUID)
    pub id: String,
    /// Task type (for routing to different handlers)
    pub task_type: String,
    /// Queue name
    pub queue: String,
    /// Task payload
    pub payload: Vec<u8>,
    /// Task status
    pub status: TaskStatus,
    /// Creation time (Unix timestamp, seconds)
    pub created_at: i64,
    /// Enqueue time (Unix timestamp, seconds)
    pub enqueued_at: Option<i64>,
}

impl TaskMessage {
    /// Encode as MessagePack
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    /// Decode from MessagePack
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(rmp_serde::from_slice(bytes)?)
    }

    /// Get task description
    pub fn description(&self) -> String {
        format!(
            "Task[type={}, queue={}, id={}, status={}]",
            self.task_type, self.queue, self.id, self.status
        )
    }
}
