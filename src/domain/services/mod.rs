pub mod availability;
pub mod filter;
pub mod report;
pub mod simulation;
pub mod status;
