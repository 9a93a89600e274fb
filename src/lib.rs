//! Warden
//!
//! A layered authorization-and-permission-resolution engine for
//! multi-tenant command surfaces: given an account identifier and a
//! requested command name, Warden decides what privilege level the account
//! should hold and whether the command is permitted for it.

pub mod authz;
