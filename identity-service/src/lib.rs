//! Identity gateway core
//!
//! Registers accounts with salted, hashed secrets and authenticates returning
//! users by issuing signed, time-bounded tokens. Transport routing and
//! persistence live behind the `AccountServicePort` and `AccountStore` seams;
//! this crate owns only the credential protocol itself.

pub mod config;
pub mod domain;

pub use domain::account;
