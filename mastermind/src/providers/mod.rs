//! External collaborators that supply secrets to the turn engine.

pub mod random_org;

pub use random_org::{ProviderError, SecretProvider, SecretSource, local_secret};
