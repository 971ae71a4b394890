mod auth;

pub use auth::{Navigation, guard};
