//! Common test utilities
//!
//! Shared helper functions and fixtures for integration tests.

#![allow(dead_code)]

use fred::prelude::RedisKey;
use taskq::{
    client::Client,
    storage::Keys,
    task::TaskMessage,
};

/// Test setup structure
///
/// Manages the Redis connection and per-test queue naming.
pub struct TestSetup {
    pub redis_url: String,
    pub queue_name: String,
    pub client: Client,
    task_ids: Vec<String>,
}

impl TestSetup {
    /// Create a new test setup
    ///
    /// # Arguments
    /// * `test_name` - Name of the test (used for queue naming)
    pub async fn new(test_name: &str) -> Self {
        let redis_url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let queue_name = format!("test-{}-{}", test_name, uuid::Uuid::new_v4());

        let client = Client::builder()
            .redis_url(&redis_url)
            .pool_size(1)
            .build()
            .await
            .expect("Failed to create client");

        Self {
            redis_url,
            queue_name,
            client,
            task_ids: Vec::new(),
        }
    }

    /// Remember a task so cleanup removes its record
    pub fn track(&mut self, task_id: &str) {
        self.task_ids.push(task_id.to_string());
    }

    /// Load the stored record of a task
    pub async fn load(&self, task_id: &str) -> Option<TaskMessage> {
        let key: RedisKey = Keys::task(task_id).into();
        let value = self.client.redis().get(key).await.expect("GET failed")?;
        let bytes = value.as_bytes().expect("Task data is not bytes");
        Some(TaskMessage::from_bytes(bytes).expect("Failed to decode task"))
    }

    /// Task ids currently pending in a queue
    pub async fn pending(&self, queue: &str) -> Vec<String> {
        let key: RedisKey = Keys::queue(queue).into();
        self.client.redis().lrange(key, 0, -1).await.expect("LRANGE failed")
    }

    /// Remove one task id from a queue's pending list
    pub async fn remove_pending(&self, queue: &str, task_id: &str) {
        let key: RedisKey = Keys::queue(queue).into();
        let _ = self.client.redis().lrem(key, task_id.into(), 1).await;
    }

    /// Whether a queue is registered in the queue set
    pub async fn is_registered(&self, queue: &str) -> bool {
        let key: RedisKey = Keys::meta_queues().into();
        self.client
            .redis()
            .sismember(key, queue.into())
            .await
            .expect("SISMEMBER failed")
    }

    /// Clean up test data and close the connection
    pub async fn cleanup(self, queues: &[&str]) {
        let mut keys: Vec<RedisKey> = self
            .task_ids
            .iter()
            .map(|id| Keys::task(id).into())
            .collect();
        keys.extend(queues.iter().map(|q| RedisKey::from(Keys::queue(q))));
        let _ = self.client.redis().del(keys).await;
        let _ = self.client.close().await;
    }
}
