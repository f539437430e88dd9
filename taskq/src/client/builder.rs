//! Client builder and enqueue implementation

use super::TaskInfo;
use crate::{
    storage::{RedisClient, RedisConfig},
    task::{Task, TaskMessage, TaskStatus},
    Error, Result,
};
use chrono::Utc;
use uuid::Uuid;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Redis connection URL
    pub redis_url: String,
    /// Connection pool size
    pub pool_size: usize,
    /// Default queue name
    pub default_queue: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            pool_size: 10,
            default_queue: "default".to_string(),
        }
    }
}

/// Client - Task producer
///
/// Used to enqueue tasks to Redis. The connection is opened by
/// [`ClientBuilder::build`] and released by [`Client::close`].
#[derive(Clone)]
pub struct Client {
    redis: RedisClient,
    default_queue: String,
}

impl Client {
    /// Create a new Client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Enqueue to the client's default queue
    pub async fn enqueue(&self, task: Task) -> Result<TaskInfo> {
        let queue = self.default_queue.clone();
        self.enqueue_to(task, &queue).await
    }

    /// Enqueue to a named queue
    ///
    /// The task is rejected before anything is written if its type or the
    /// queue name is blank. On success the task record, the pending-list
    /// entry and the queue registration are all written; on failure none are.
    pub async fn enqueue_to(&self, task: Task, queue: &str) -> Result<TaskInfo> {
        task.validate()?;
        if queue.trim().is_empty() {
            return Err(Error::Validation("queue name cannot be empty".into()));
        }

        let now = Utc::now().timestamp();
        let message = TaskMessage {
            id: Uuid::new_v4().to_string(),
            task_type: task.task_type().to_string(),
            queue: queue.to_string(),
            payload: task.payload().to_vec(),
            status: TaskStatus::Pending,
            created_at: now,
            enqueued_at: Some(now),
        };

        let task_data = message.to_bytes()?;
        self.redis
            .store_and_push(&message.id, &message.queue, task_data)
            .await?;

        tracing::debug!("Task enqueued: {}", message.description());

        Ok(TaskInfo {
            id: message.id,
            queue: message.queue,
            task_type: message.task_type,
            enqueued_at: now,
        })
    }

    /// Default queue used by [`Client::enqueue`]
    pub fn default_queue(&self) -> &str {
        &self.default_queue
    }

    /// Underlying Redis client
    #[doc(hidden)]
    pub fn redis(&self) -> &RedisClient {
        &self.redis
    }

    /// Close the connection pool
    pub async fn close(self) -> Result<()> {
        self.redis.quit().await?;
        tracing::debug!("Client connection closed");
        Ok(())
    }
}

/// Client builder
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Set Redis URL
    #[must_use]
    pub fn redis_url(mut self, url: impl Into<String>) -> Self {
        self.config.redis_url = url.into();
        self
    }

    /// Set connection pool size
    #[must_use]
    pub fn pool_size(mut self, size: usize) -> Self {
        self.config.pool_size = size;
        self
    }

    /// Set default queue
    #[must_use]
    pub fn default_queue(mut self, queue: impl Into<String>) -> Self {
        self.config.default_queue = queue.into();
        self
    }

    /// Build Client, connecting to Redis
    pub async fn build(self) -> Result<Client> {
        if self.config.pool_size == 0 {
            return Err(Error::Config("pool size must be at least 1".into()));
        }

        let redis = RedisClient::new(RedisConfig {
            url: self.config.redis_url,
            pool_size: self.config.pool_size,
        })
        .await?;

        Ok(Client {
            redis,
            default_queue: self.config.default_queue,
        })
    }
}
