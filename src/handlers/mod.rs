//! HTTP handlers for the employee records service.

pub mod auth;
pub mod employee;
pub mod statistics;

pub use auth::*;
pub use employee::*;
pub use statistics::*;
