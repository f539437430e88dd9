//! Redis Key manager
//!
//! Provides unified Redis key naming convention shared with the broker.

/// Redis Key prefix
const PREFIX: &str = "taskq";

/// Redis Key manager
#[derive(Debug, Clone)]
pub struct Keys;

impl Keys {
    /// Pending queue Key (List)
    /// Example: taskq:queue:default
    pub fn queue(queue_name: &str) -> String {
        format!("{}:queue:{}", PREFIX, queue_name)
    }

    /// Task detail Key (String, MessagePack)
    /// Example: taskq:task:a1b2c3d4-...
    pub fn task(task_id: &str) -> String {
        format!("{}:task:{}", PREFIX, task_id)
    }

    /// All queues set Key (Set)
    pub fn meta_queues() -> String {
        format!("{}:meta:queues", PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_formats() {
        assert_eq!(Keys::queue("default"), "taskq:queue:default");
        assert_eq!(Keys::queue("urgent"), "taskq:queue:urgent");
        assert_eq!(Keys::task("abc123"), "taskq:task:abc123");
        assert_eq!(Keys::meta_queues(), "taskq:meta:queues");
    }
}
