//! Alternative repository implementations

pub mod memory;

pub use memory::InMemoryProductRepository;
