//! # uplift-core
//!
//! Business logic of the uplift comment core: repository and gateway
//! contracts, the commentable resolver registry, visibility and
//! permission policies, and the comment usecases.
//!
//! Persistence, transports and notification delivery are external
//! collaborators behind the traits in [`repositories`] and [`gateways`].

pub mod authorization;
pub mod db;
pub mod gateways;
pub mod registry;
pub mod repositories;
pub mod usecases;
pub mod visibility;

pub mod entities {
    pub use uplift_entities::{comment::*, commentable::*, id::*, time::*, user::*};
}
