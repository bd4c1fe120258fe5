//! Repository layer over the relational store.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep SQL details out of the service layer.
//!
//! # Invariants
//! - Identifiers are normalized before every read and write.
//! - Repository APIs return semantic errors (`DuplicateIdentifier`) in
//!   addition to DB transport errors.

pub mod credential_repo;
