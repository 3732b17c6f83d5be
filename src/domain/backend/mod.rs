//! Generative backend capability used to write the primary reply

mod error;
mod provider;

pub use error::BackendError;
pub use provider::GenerativeBackend;

#[cfg(test)]
pub use provider::MockGenerativeBackend;
