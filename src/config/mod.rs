//! Language profile configuration for xstub.
//!
//! The profile names the suffixes, reserved stub filename, declaration keyword
//! and comment marker the classifier and resolver work with. It is read from
//! `--config <FILE>` or `<root>/.xstub.yaml`, falling back to the Go defaults.
//! Unknown fields are ignored for forward compatibility.

mod model;
mod operations;


pub use model::{CONFIG_FILENAME, Config};
