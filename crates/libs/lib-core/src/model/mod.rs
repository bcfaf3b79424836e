//! # Data Model
//!
//! Account entities and the database store.

pub mod store;
