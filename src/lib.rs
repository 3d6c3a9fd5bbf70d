pub mod chart;
pub mod config;
pub mod content;
pub mod display;
pub mod error;
pub mod ledger;
pub mod scorer;
pub mod session;
pub mod types;
