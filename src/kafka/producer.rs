use crate::{event::SampleEvent, Error, Result};
use rdkafka::message::{Header, OwnedHeaders};
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use rdkafka::ClientConfig;
use std::time::Duration;

/// Synchronous-in-effect publisher: every send awaits the broker's
/// delivery report before the caller moves on.
pub struct EventProducer {
    producer: FutureProducer,
    send_timeout: Duration,
}

impl EventProducer {
    pub fn new(brokers: &str, send_timeout: Duration) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("acks", "all")
            .set("message.timeout.ms", send_timeout.as_millis().to_string())
            .create()
            .map_err(Error::Kafka)?;

        Ok(Self {
            producer,
            send_timeout,
        })
    }

    /// Publishes one record and blocks until the broker acknowledges it,
    /// returning the assigned `(partition, offset)`.
    ///
    /// The key is compact JSON; a tombstone is sent with no payload at
    /// all. Headers go on the wire as raw bytes, unmodified and in
    /// insertion order. Exceeding the per-record ack bound is fatal.
    pub async fn send_event(&self, topic: &str, event: &SampleEvent) -> Result<(i32, i64)> {
        let key = event.encoded_key()?;
        let payload = event.encoded_value()?;

        let mut headers = OwnedHeaders::new_with_capacity(event.headers.len());
        for (name, value) in &event.headers {
            headers = headers.insert(Header {
                key: name.as_str(),
                value: Some(value.as_slice()),
            });
        }

        let mut record = FutureRecord::<String, String>::to(topic)
            .key(&key)
            .headers(headers);
        if let Some(payload) = payload.as_ref() {
            record = record.payload(payload);
        }

        let delivery = tokio::time::timeout(
            self.send_timeout,
            self.producer.send(record, Timeout::Never),
        )
        .await
        .map_err(|_| Error::Timeout {
            message: format!(
                "no broker ack within {}s for key {}",
                self.send_timeout.as_secs(),
                event.key
            ),
        })?;

        delivery.map_err(|(e, _)| Error::Kafka(e))
    }

    /// Drains any buffered sends. Called on every exit path of the emit
    /// phase, including after a failed send.
    pub fn flush(&self) -> Result<()> {
        self.producer
            .flush(Timeout::After(self.send_timeout))
            .map_err(Error::Kafka)
    }
}
