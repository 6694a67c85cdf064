#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod declarations;
pub mod format;
pub mod questions;
pub mod render;
pub mod validate;

#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
