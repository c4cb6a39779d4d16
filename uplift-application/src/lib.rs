//! # uplift-application
//!
//! Orchestration of the comment core: each flow validates through the
//! usecases, mutates storage, fires the notification side effects and
//! shapes the outward-facing projection.

#[macro_use]
extern crate log;

mod create_comment;
mod delete_comment;
mod load_comments;
mod project_comment;

pub mod prelude {
    pub use super::{create_comment::*, delete_comment::*, load_comments::*, project_comment::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use uplift_core::{authorization, db::*, entities::*, gateways, usecases, visibility};

#[cfg(test)]
pub(crate) mod tests;
