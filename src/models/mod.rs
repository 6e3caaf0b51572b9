//! Persistence models for the employee records service.

pub mod employee;
pub mod user;

pub use employee::{DepartmentStat, Employee, NewEmployee};
pub use user::{NewUser, User, UserRole};
