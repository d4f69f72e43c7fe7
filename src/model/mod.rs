//! Core data model types for digest_store

mod descriptor;
mod digest;

pub use descriptor::Descriptor;
pub use digest::{Digest, SHA256_PREFIX};
