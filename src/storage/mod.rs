pub mod engine;
pub mod memory;
pub mod persistence;

pub use engine::KeyValueStore;
pub use memory::InMemoryStore;
pub use persistence::FileStore;
