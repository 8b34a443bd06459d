use cdc_seed::SeederConfig;
use std::env;

/// Get test configuration from environment variables
pub fn get_test_config() -> SeederConfig {
    SeederConfig {
        brokers: env::var("TEST_KAFKA_BROKERS").unwrap_or_else(|_| "localhost:9092".to_string()),
        // Unique topic per test process so reruns see a fresh log
        topic: format!("cdc_seed_test_{}", std::process::id()),
        create_topic: true,
        ..SeederConfig::default()
    }
}
