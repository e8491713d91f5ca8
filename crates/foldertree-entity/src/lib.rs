//! # foldertree-entity
//!
//! Domain entity models for FolderTree. Database entities derive
//! `sqlx::FromRow`; every type serializes to the camelCase JSON shape
//! served by the HTTP API.

pub mod folder;
