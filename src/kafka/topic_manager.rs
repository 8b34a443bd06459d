use crate::{Error, Result};
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::error::RDKafkaErrorCode;
use rdkafka::ClientConfig;
use std::time::Duration;
use tracing::{info, instrument};

/// Best-effort topic provisioning. Callers treat every error from this
/// path as advisory: brokers may auto-create topics on first publish, so
/// a failed create never blocks the seeding run.
pub struct TopicManager {
    admin_client: AdminClient<DefaultClientContext>,
}

impl TopicManager {
    pub fn new(brokers: &str) -> Result<Self> {
        let admin_client: AdminClient<_> = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .create()
            .map_err(Error::Kafka)?;

        Ok(Self { admin_client })
    }

    /// Creates the topic if the cluster metadata does not already list it.
    #[instrument(skip(self), fields(topic = %topic_name))]
    pub async fn ensure_topic(
        &self,
        topic_name: &str,
        partitions: i32,
        replication_factor: i32,
    ) -> Result<()> {
        if self.topic_exists(topic_name)? {
            info!("Topic '{}' already exists", topic_name);
            return Ok(());
        }

        info!("Creating topic '{}'", topic_name);
        self.create_topic(topic_name, partitions, replication_factor)
            .await
    }

    fn topic_exists(&self, topic_name: &str) -> Result<bool> {
        let metadata = self
            .admin_client
            .inner()
            .fetch_metadata(Some(topic_name), Duration::from_secs(5))
            .map_err(Error::Kafka)?;

        // A metadata probe for an unknown topic can still return an entry
        // flagged with UnknownTopicOrPartition; only count healthy ones.
        Ok(metadata
            .topics()
            .iter()
            .any(|topic| topic.name() == topic_name && topic.error().is_none()))
    }

    async fn create_topic(
        &self,
        topic_name: &str,
        partitions: i32,
        replication_factor: i32,
    ) -> Result<()> {
        let new_topic = NewTopic::new(
            topic_name,
            partitions,
            TopicReplication::Fixed(replication_factor),
        );

        let opts = AdminOptions::new().operation_timeout(Some(Duration::from_secs(30)));

        let results = self
            .admin_client
            .create_topics(&[new_topic], &opts)
            .await
            .map_err(Error::Kafka)?;

        for result in results {
            match result {
                Ok(topic) => {
                    info!("Successfully created topic: {}", topic);
                }
                // Lost a create race against the broker or another seeder
                // run; the topic is there, which is all we need.
                Err((topic, RDKafkaErrorCode::TopicAlreadyExists)) => {
                    info!("Topic '{}' already exists", topic);
                }
                Err((_topic, error)) => {
                    return Err(Error::Kafka(rdkafka::error::KafkaError::AdminOp(error)));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires running Kafka
    async fn test_ensure_topic_is_idempotent() {
        let manager = TopicManager::new("localhost:9092").unwrap();

        let topic_name = "cdc-seed-topic-manager-test";

        manager.ensure_topic(topic_name, 1, 1).await.unwrap();
        assert!(manager.topic_exists(topic_name).unwrap());

        // Second call sees the existing topic and does nothing.
        manager.ensure_topic(topic_name, 1, 1).await.unwrap();
    }
}
