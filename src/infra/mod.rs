pub mod factory;
pub mod sources;
