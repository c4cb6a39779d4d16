#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # uplift-entities
//!
//! Reusable, agnostic domain entities for the uplift comment core.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod comment;
pub mod commentable;
pub mod id;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
