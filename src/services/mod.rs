//! Services layer: data access, token handling, and startup seeding.

mod database;
mod jwt;
pub mod seed;

pub use database::Database;
pub use jwt::{JwtService, TokenClaims, TokenError};
