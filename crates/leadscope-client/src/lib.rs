pub mod client;
pub mod error;
pub mod types;

pub use client::{Endpoint, LeadsClient};
pub use error::LeadsClientError;
pub use types::ExtractedLead;
