//! Outbound adapters implementing the domain's driven ports.

pub mod in_memory;
pub mod persistence;
pub mod weather;
