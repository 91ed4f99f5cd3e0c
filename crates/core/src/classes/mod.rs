//! Class membership module.
//!
//! Students join a class with a six-character invite code and receive the
//! fixed starting balance. Memberships are append-only: leaving a class is
//! rejected by policy.

pub mod errors;
pub mod model;
pub mod service;
pub mod store;

#[cfg(test)]
mod service_tests;

pub use errors::ClassError;
pub use model::{Class, ClassMembership, NewClassMembership};
pub use service::{ClassService, ClassServiceTrait};
pub use store::ClassStore;
