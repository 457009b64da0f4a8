//! Module for the account collection API endpoints.
//!
//! This module handles the CRUD surface of the service: creating, reading,
//! updating, deleting, and listing account records.

pub mod handlers;
pub mod routes;
