//! SeaORM entities

pub mod product;
