//! Utility functions for the CLI

/// Build a Redis URL from a host and port
///
/// IPv6 literals are bracketed.
pub fn redis_url(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("redis://[{}]:{}", host, port)
    } else {
        format!("redis://{}:{}", host, port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_url() {
        assert_eq!(redis_url("localhost", 6379), "redis://localhost:6379");
        assert_eq!(redis_url("10.0.0.5", 7000), "redis://10.0.0.5:7000");
    }

    #[test]
    fn test_redis_url_ipv6() {
        assert_eq!(redis_url("::1", 6379), "redis://[::1]:6379");
        assert_eq!(redis_url("[::1]", 6379), "redis://[::1]:6379");
    }
}
