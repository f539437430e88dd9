//! Client SDK
//!
//! Provides the producer side: connect, enqueue one or more tasks, close.

pub mod builder;

pub use builder::{Client, ClientBuilder, ClientConfig};

/// Result of a successful enqueue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
    /// Assigned task ID
    pub id: String,
    /// Queue the task was pushed to
    pub queue: String,
    /// Task type
    pub task_type: String,
    /// Enqueue time (Unix timestamp, seconds)
    pub enqueued_at: i64,
}

impl std::fmt::Display for TaskInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID: {}, Queue: {}", self.id, self.queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_info_display() {
        let info = TaskInfo {
            id: "abc".to_string(),
            queue: "urgent".to_string(),
            task_type: "raw".to_string(),
            enqueued_at: 0,
        };

        assert_eq!(info.to_string(), "ID: abc, Queue: urgent");
    }
}
