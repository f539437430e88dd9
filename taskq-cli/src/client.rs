//! Redis client factory for the CLI
//!
//! Opens a single-connection client for one submission and always closes it.

use taskq::client::{Client, TaskInfo};
use taskq::{Result, Task};

/// Create a taskq client with one connection
pub async fn create_client(redis_url: &str) -> Result<Client> {
    Client::builder()
        .redis_url(redis_url)
        .pool_size(1)
        .build()
        .await
}

/// Connect, enqueue `task` to `queue`, then close the connection whether or
/// not the enqueue succeeded.
pub async fn submit(redis_url: &str, task: Task, queue: &str) -> Result<TaskInfo> {
    let client = create_client(redis_url).await?;

    let result = client.enqueue_to(task, queue).await;

    if let Err(e) = client.close().await {
        tracing::warn!("Failed to close Redis connection: {}", e);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_unreachable_broker() {
        let task = Task::from_input("nums", "42").unwrap();
        let result = submit("redis://127.0.0.1:1", task, "default").await;

        let err = result.unwrap_err();
        assert!(err.is_transport(), "unexpected error: {}", err);
    }

    #[tokio::test]
    #[ignore = "Requires Redis server"]
    async fn test_create_client() {
        let redis_url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = create_client(&redis_url).await.unwrap();
        client.close().await.unwrap();
    }
}
