//! Route handlers organized by domain.

pub mod folder;
pub mod health;
