//! zipdir: pack files and folders that share a parent folder into one .zip archive.
//!
//! This crate provides the archive pipeline, the command definitions, and the
//! path utilities for the `zip` CLI application.

pub mod archive;
pub mod commands;
pub mod constants;
pub mod error;
pub mod file_util;
pub mod job;
pub mod path_util;
pub mod settings;
pub mod walk;

pub use error::{Error, Result};
