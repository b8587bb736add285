//! Query Handlers 实现

mod employee_handlers;

pub use employee_handlers::*;
