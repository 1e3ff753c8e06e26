//! Application layer: use cases built on the domain repository interface

pub mod service;

pub use service::ProductService;
