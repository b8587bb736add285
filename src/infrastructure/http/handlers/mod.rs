//! HTTP Handlers

mod employee;
mod ping;

pub use employee::*;
pub use ping::*;
