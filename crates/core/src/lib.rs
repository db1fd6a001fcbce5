//! Core domain types and abstractions for the matchday service.
//!
//! This crate holds the league domain model (teams, fixtures, accounts),
//! the closed error taxonomy, and the repository/cache traits that the
//! server crate implements against concrete backends. It performs no I/O.

pub mod cache;
pub mod league;
pub mod storage;
