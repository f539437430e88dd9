//! Redis client wrapper
//!
//! Provides type-safe Redis operation interfaces.

use crate::{storage::Keys, Result};
use fred::{
    interfaces::*,
    prelude::*,
    types::RedisConfig as FredRedisConfig,
};
use std::sync::Arc;

/// Redis connection configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis connection URL
    pub url: String,
    /// Connection pool size
    pub pool_size: usize,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            pool_size: 10,
        }
    }
}

/// Redis client
///
/// Connects without a reconnect policy: a refused or dropped connection
/// surfaces as an error instead of being retried in the background.
#[derive(Clone)]
pub struct RedisClient {
    pool: Arc<RedisPool>,
}

impl RedisClient {
    /// Create a new Redis client and wait for the pool to connect
    pub async fn new(config: RedisConfig) -> Result<Self> {
        let redis_config = FredRedisConfig::from_url(&config.url)?;
        let pool_size = config.pool_size.max(1);
        let pool = RedisPool::new(redis_config, None, None, None, pool_size)?;

        pool.init().await?;
        tracing::debug!("Connected to {} (pool size {})", config.url, pool_size);

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Create client from connection URL
    pub async fn from_url(url: impl Into<String>) -> Result<Self> {
        Self::new(RedisConfig {
            url: url.into(),
            ..Default::default()
        })
        .await
    }

    /// Ping Redis
    pub async fn ping(&self) -> Result<String> {
        let result: String = self.pool.ping().await?;
        Ok(result)
    }

    /// Get Value
    #[doc(hidden)]
    pub async fn get(&self, key: RedisKey) -> Result<Option<RedisValue>> {
        let result: Option<RedisValue> = self.pool.get(key).await?;
        Ok(result)
    }

    /// Delete Key
    #[doc(hidden)]
    pub async fn del(&self, keys: Vec<RedisKey>) -> Result<usize> {
        let result: usize = self.pool.del(keys).await?;
        Ok(result)
    }

    /// List operation: get range
    #[doc(hidden)]
    pub async fn lrange(&self, key: RedisKey, start: i64, stop: i64) -> Result<Vec<String>> {
        let result: Vec<String> = self.pool.lrange(key, start, stop).await?;
        Ok(result)
    }

    /// List operation: remove element
    #[doc(hidden)]
    pub async fn lrem(&self, key: RedisKey, value: RedisValue, count: i64) -> Result<u64> {
        let result: u64 = self.pool.lrem(key, count, value).await?;
        Ok(result)
    }

    /// Set operation: check if member exists
    #[doc(hidden)]
    pub async fn sismember(&self, key: RedisKey, member: RedisValue) -> Result<bool> {
        let result: bool = self.pool.sismember(key, member).await?;
        Ok(result)
    }

    /// Store a task record, push its id onto the queue's pending list and
    /// register the queue, all inside one MULTI/EXEC.
    pub async fn store_and_push(&self, task_id: &str, queue_name: &str, task_data: Vec<u8>) -> Result<()> {
        let task_key: RedisKey = Keys::task(task_id).into();
        let queue_key: RedisKey = Keys::queue(queue_name).into();
        let queues_key: RedisKey = Keys::meta_queues().into();

        let trx = self.pool.next().multi();
        let _: () = trx
            .set(task_key, RedisValue::Bytes(task_data.into()), None, None, false)
            .await?;
        let _: () = trx.rpush(queue_key, RedisValue::from(task_id)).await?;
        let _: () = trx.sadd(queues_key, RedisValue::from(queue_name)).await?;
        let _: Vec<RedisValue> = trx.exec(true).await?;
        Ok(())
    }

    /// Close every connection in the pool
    pub async fn quit(&self) -> Result<()> {
        self.pool.quit().await?;
        Ok(())
    }
}
