pub mod expected;
pub mod models;
