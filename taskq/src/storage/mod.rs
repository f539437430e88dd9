//! Storage layer
//!
//! Provides the Redis key layout and connection wrapper.

pub mod keys;
pub mod redis;

pub use keys::Keys;
pub use redis::{RedisClient, RedisConfig};
