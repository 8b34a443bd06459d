/// Default broker address when `--bootstrap-server` is not given.
pub const DEFAULT_BROKERS: &str = "localhost:9092";

/// Default destination topic when `--topic` is not given.
pub const DEFAULT_TOPIC: &str = "iidr.CDC.TEST_ORDERS";

/// Runtime configuration for one seeding run.
///
/// All parameters come from CLI flags with defaults; there is no file or
/// environment-variable configuration surface.
#[derive(Debug, Clone)]
pub struct SeederConfig {
    /// Kafka bootstrap server(s), `host:port`.
    pub brokers: String,
    /// Destination topic for the sample batch.
    pub topic: String,
    /// Request best-effort topic creation before publishing.
    pub create_topic: bool,
    /// Per-record bound on waiting for the broker delivery report.
    pub send_timeout_secs: u64,
    /// Partition count used when creating the topic.
    pub partitions: i32,
    /// Replication factor used when creating the topic.
    pub replication_factor: i32,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            brokers: DEFAULT_BROKERS.to_string(),
            topic: DEFAULT_TOPIC.to_string(),
            create_topic: false,
            send_timeout_secs: default_send_timeout(),
            partitions: default_partitions(),
            replication_factor: default_replication_factor(),
        }
    }
}

fn default_send_timeout() -> u64 {
    10
}

fn default_partitions() -> i32 {
    1
}

fn default_replication_factor() -> i32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeederConfig::default();
        assert_eq!(config.brokers, "localhost:9092");
        assert_eq!(config.topic, "iidr.CDC.TEST_ORDERS");
        assert!(!config.create_topic);
        assert_eq!(config.send_timeout_secs, 10);
        assert_eq!(config.partitions, 1);
        assert_eq!(config.replication_factor, 1);
    }
}
