//! Sweetcart application: catalog loading, configuration and logging for the
//! `sweetcart` command-line cart.

pub mod catalog;
pub mod config;
pub mod observability;
pub mod session;
