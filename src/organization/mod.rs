// src/organization/mod.rs
//! Pure organisation logic: classification, composite names, filtering and
//! the public hierarchy. Nothing in here talks to the store.
pub mod classify;
pub mod composite;
pub mod filter;
pub mod hierarchy;
pub mod slider;
