pub mod client;
pub mod error;
pub mod status;

pub use client::{RelayClient, RelayTarget};
pub use error::{RelayError, RelayErrorKind};
pub use status::RelayStatus;
