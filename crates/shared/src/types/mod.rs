//! Common types used across the application.

pub mod de;
pub mod id;
pub mod money;

pub use id::{InvalidUserId, UserId};
pub use money::{CategoryAmountMap, total_amount};
