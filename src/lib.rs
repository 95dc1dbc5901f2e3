//! Event Roster API Library
//!
//! Events, their participant pool and roster, and random pairing of the
//! roster into teams of two, served over HTTP behind a password gate.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
