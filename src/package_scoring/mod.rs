//! Package scoring domain: value objects, scoring policies and pure services.

pub mod domain;
pub mod policies;
pub mod services;
