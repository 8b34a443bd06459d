pub mod producer;
pub mod topic_manager;

pub use producer::EventProducer;
pub use topic_manager::TopicManager;
