//! # taskq
//!
//! Producer-side client for a Redis-backed task queue.
//!
//! ## Features
//!
//! - Task descriptor with payload normalization (JSON objects are re-serialized, anything else is kept as-is)
//! - Atomic enqueue: task record, pending-list entry and queue registration in one transaction
//! - Per-call destination queue with a configurable default
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taskq::client::Client;
//! use taskq::Task;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .redis_url("redis://localhost:6379")
//!         .pool_size(1)
//!         .build()
//!         .await?;
//!
//!     let task = Task::from_input("emails", r#"{"to":"a@b.com","subj":"hi"}"#)?;
//!     let result = client.enqueue_to(task, "default").await;
//!     client.close().await?;
//!
//!     let info = result?;
//!     println!("ID: {}, Queue: {}", info.id, info.queue);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Public module exports
pub mod error;
pub mod task;

// Client SDK
pub mod client;

// Storage layer
pub mod storage;

// Re-export common types
pub use error::{Error, Result};
pub use task::{Payload, Task};
