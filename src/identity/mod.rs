//! Pseudonymous identities: generation and durable storage.

pub mod generator;
pub mod store;

pub use generator::{ADJECTIVES, IdentityGenerator, NOUNS, generate, generate_with};
pub use store::IdentityStore;
