pub mod config;
pub mod emitter;
pub mod error;
pub mod event;
pub mod fixtures;

pub mod kafka;

pub use config::SeederConfig;
pub use emitter::Emitter;
pub use error::{Error, Result};
pub use event::{Operation, SampleEvent};
