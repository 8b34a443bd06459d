//! Hand-authored CDC sample batches.
//!
//! One swappable fixture function replaces the duplicated inline event
//! tables of ad-hoc seeding scripts: the emitter takes any slice of
//! [`SampleEvent`]s, so alternate scenario tables are just more functions.

use crate::event::SampleEvent;
use serde_json::json;

/// The canonical seeding batch: inserts, updates, and deletes across three
/// order tables plus one corrupt record, in a fixed publish order.
///
/// Exercises multi-connector table filtering downstream, where each
/// connector reads the same topic but only processes its designated table.
/// The run timestamp is injected so every invocation of the seeder stamps
/// a fresh `A_TIMSTAMP` on the whole batch.
pub fn sample_events(timestamp: &str) -> Vec<SampleEvent> {
    vec![
        // TEST_ORDERS
        SampleEvent::insert(
            "TEST_ORDERS",
            timestamp,
            json!({"ID": 1}),
            json!({"ID": 1, "ORDER_NAME": "Order-001", "AMOUNT": 100.50, "STATUS": "NEW", "CREATED_AT": "2026-01-15T10:00:00", "UPDATED_AT": "2026-01-15T10:00:00", "ORDER_DATE": "2026-01-15", "ORDER_TIME": "10:00:00"}),
        ),
        SampleEvent::insert(
            "TEST_ORDERS",
            timestamp,
            json!({"ID": 2}),
            json!({"ID": 2, "ORDER_NAME": "Order-002", "AMOUNT": 200.75, "STATUS": "NEW", "CREATED_AT": "2026-01-15T10:01:00", "UPDATED_AT": "2026-01-15T10:01:00", "ORDER_DATE": "2026-01-15", "ORDER_TIME": "10:01:00"}),
        ),
        SampleEvent::insert(
            "TEST_ORDERS",
            timestamp,
            json!({"ID": 3}),
            json!({"ID": 3, "ORDER_NAME": "Order-003", "AMOUNT": 350.00, "STATUS": "PENDING", "CREATED_AT": "2026-01-15T10:02:00", "UPDATED_AT": "2026-01-15T10:02:00", "ORDER_DATE": "2026-01-15", "ORDER_TIME": "10:02:00"}),
        ),
        SampleEvent::update(
            "TEST_ORDERS",
            timestamp,
            json!({"ID": 2}),
            json!({"ID": 2, "ORDER_NAME": "Order-002-Updated", "AMOUNT": 250.00, "STATUS": "PROCESSING", "CREATED_AT": "2026-01-15T10:01:00", "UPDATED_AT": "2026-01-15T10:05:00", "ORDER_DATE": "2026-01-15", "ORDER_TIME": "10:01:00"}),
        ),
        SampleEvent::delete("TEST_ORDERS", timestamp, json!({"ID": 3})),
        // TEST_ORDERS_v2
        SampleEvent::insert(
            "TEST_ORDERS_v2",
            timestamp,
            json!({"ID": 1}),
            json!({"ID": 1, "ORDER_NAME": "V2-Order-001", "AMOUNT": 111.11, "STATUS": "NEW", "CREATED_AT": "2026-01-15T11:00:00", "UPDATED_AT": "2026-01-15T11:00:00", "ORDER_DATE": "2026-01-15", "ORDER_TIME": "11:00:00"}),
        ),
        SampleEvent::insert(
            "TEST_ORDERS_v2",
            timestamp,
            json!({"ID": 2}),
            json!({"ID": 2, "ORDER_NAME": "V2-Order-002", "AMOUNT": 222.22, "STATUS": "PENDING", "CREATED_AT": "2026-01-15T11:01:00", "UPDATED_AT": "2026-01-15T11:01:00", "ORDER_DATE": "2026-01-15", "ORDER_TIME": "11:01:00"}),
        ),
        SampleEvent::update(
            "TEST_ORDERS_v2",
            timestamp,
            json!({"ID": 1}),
            json!({"ID": 1, "ORDER_NAME": "V2-Order-001-Updated", "AMOUNT": 119.99, "STATUS": "COMPLETED", "CREATED_AT": "2026-01-15T11:00:00", "UPDATED_AT": "2026-01-15T11:30:00", "ORDER_DATE": "2026-01-15", "ORDER_TIME": "11:00:00"}),
        ),
        // TEST_ORDERS_v3
        SampleEvent::insert(
            "TEST_ORDERS_v3",
            timestamp,
            json!({"ID": 1}),
            json!({"ID": 1, "ORDER_NAME": "V3-Order-001", "AMOUNT": 333.33, "STATUS": "NEW", "CREATED_AT": "2026-01-15T12:00:00", "UPDATED_AT": "2026-01-15T12:00:00", "ORDER_DATE": "2026-01-15", "ORDER_TIME": "12:00:00"}),
        ),
        SampleEvent::insert(
            "TEST_ORDERS_v3",
            timestamp,
            json!({"ID": 2}),
            json!({"ID": 2, "ORDER_NAME": "V3-Order-002", "AMOUNT": 444.44, "STATUS": "PROCESSING", "CREATED_AT": "2026-01-15 12:01:00", "UPDATED_AT": "2026-01-15 12:01:00", "ORDER_DATE": "2026-01-15", "ORDER_TIME": "12:01:00"}),
        ),
        SampleEvent::insert(
            "TEST_ORDERS_v3",
            timestamp,
            json!({"ID": 3}),
            json!({"ID": 3, "ORDER_NAME": "V3-Order-003", "AMOUNT": 555.55, "STATUS": "SHIPPED", "CREATED_AT": "2026-01-15 12:02:00", "UPDATED_AT": "2026-01-15 12:02:00", "ORDER_DATE": "2026-01-15", "ORDER_TIME": "12:02:00"}),
        ),
        SampleEvent::delete("TEST_ORDERS_v3", timestamp, json!({"ID": 2})),
        // Corrupt record: no A_ENTTYP header, so downstream routing for
        // unclassifiable events can be exercised.
        SampleEvent::corrupt(
            "TEST_ORDERS",
            timestamp,
            json!({"ID": 99}),
            json!({"ID": 99, "ORDER_NAME": "Corrupt-Order", "AMOUNT": 999.99, "STATUS": "BAD", "CREATED_AT": "2026-01-15 10:03:00", "UPDATED_AT": "2026-01-15 10:03:00", "ORDER_DATE": "2026-01-15", "ORDER_TIME": "10:03:00"}),
        ),
    ]
}
