//! taskq-put - enqueue a single task from the command line
//!
//! ```text
//! taskq-put <topic> <payload> [-q queue_name] [-p redis_port]
//! ```

mod client;
mod utils;

use clap::Parser;
use color_eyre::{eyre::WrapErr, Section};
use std::ffi::OsString;
use taskq::Task;
use tracing_subscriber::EnvFilter;

/// Printed to stdout when the positional arguments are missing
const USAGE: &str = "Usage: taskq-put <topic> <payload> [-q queue_name] [-p redis_port]";

#[derive(Parser, Debug)]
#[command(name = "taskq-put")]
#[command(about = "Enqueue a single task into a Redis-backed task queue", long_about = None)]
#[command(version)]
#[command(override_usage = "taskq-put <topic> <payload> [-q queue_name] [-p redis_port]")]
struct Cli {
    /// Queue name
    #[arg(short, long, default_value = "default")]
    queue: String,

    /// Redis port on --host
    #[arg(short, long, default_value_t = 6379)]
    port: u16,

    /// Redis host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Full Redis URL, overrides --host and --port
    #[arg(long)]
    redis_url: Option<String>,

    /// Task topic
    topic: Option<String>,

    /// Task payload, a JSON object or any other bytes
    ///
    /// The token right after the topic is always the payload, even when it
    /// starts with `-`, unless it only spells known short flags (`-q`).
    #[arg(allow_hyphen_values = true)]
    payload: Option<OsString>,

    /// Trailing arguments, ignored
    #[arg(hide = true)]
    extra: Vec<OsString>,
}

impl Cli {
    fn redis_url(&self) -> String {
        match &self.redis_url {
            Some(url) => url.clone(),
            None => utils::redis_url(&self.host, self.port),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing();

    let (Some(topic), Some(payload)) = (&cli.topic, &cli.payload) else {
        println!("{}", USAGE);
        std::process::exit(1);
    };
    if !cli.extra.is_empty() {
        tracing::debug!("Ignoring {} extra argument(s)", cli.extra.len());
    }

    let task = Task::from_input(topic.as_str(), payload.as_encoded_bytes())
        .wrap_err("Failed to create task")?;

    let redis_url = cli.redis_url();
    let info = match client::submit(&redis_url, task, &cli.queue).await {
        Ok(info) => info,
        Err(e) => {
            let transport = e.is_transport();
            let report = color_eyre::eyre::Report::new(e).wrap_err("Failed to enqueue task");
            return Err(if transport {
                report.suggestion(format!("Check that the broker is reachable at {}", redis_url))
            } else {
                report
            });
        }
    };

    println!("Task enqueued successfully. {}", info);
    Ok(())
}

/// Log to stderr so stdout only carries the result line
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
