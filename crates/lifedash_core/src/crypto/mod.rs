//! Password hashing primitives used by the authentication flow.

pub mod password;
