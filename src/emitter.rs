//! The seeding batch job: a strictly sequential, single-pass publish of
//! an injected event table.

use crate::event::{SampleEvent, OP_NOT_AVAILABLE};
use crate::kafka::EventProducer;
use crate::{Result, SeederConfig};
use std::time::Duration;
use tracing::{info, warn};

pub struct Emitter {
    config: SeederConfig,
    producer: EventProducer,
}

impl Emitter {
    pub fn new(config: SeederConfig) -> Result<Self> {
        let producer = EventProducer::new(
            &config.brokers,
            Duration::from_secs(config.send_timeout_secs),
        )?;

        Ok(Self { config, producer })
    }

    /// Publishes every record of the batch in list order, awaiting the
    /// broker ack for each before sending the next.
    ///
    /// Any publish failure aborts the run: a partial batch would poison
    /// the deterministic consumer-side assertions this seeder exists to
    /// enable. The producer is flushed on every exit path, including the
    /// abort, so records already handed to the client are not stranded
    /// in its buffer.
    pub async fn run(&self, events: &[SampleEvent]) -> Result<()> {
        info!(
            count = events.len(),
            topic = %self.config.topic,
            "Producing sample events"
        );

        let outcome = self.send_all(events).await;

        if let Err(flush_err) = self.producer.flush() {
            match outcome {
                Ok(()) => return Err(flush_err),
                Err(_) => warn!("Flush after failed send also failed: {}", flush_err),
            }
        }
        outcome?;

        info!(count = events.len(), "All sample events produced");
        Ok(())
    }

    async fn send_all(&self, events: &[SampleEvent]) -> Result<()> {
        for (i, event) in events.iter().enumerate() {
            let (partition, offset) = self
                .producer
                .send_event(&self.config.topic, event)
                .await?;

            info!(
                seq = i + 1,
                table = event.table_name().unwrap_or(OP_NOT_AVAILABLE),
                op = event.operation_marker().unwrap_or(OP_NOT_AVAILABLE),
                key = %event.key,
                partition,
                offset,
                "Sent"
            );
        }

        Ok(())
    }
}
