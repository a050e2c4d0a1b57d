pub mod catalog;
pub mod error;
pub mod resolver;
pub mod router;
pub mod rules;
pub mod service;
pub mod session;
pub mod store;
pub mod synthesizer;
pub mod types;

pub use error::{GuideError, Result};
pub use service::GuideService;
