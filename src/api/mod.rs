pub mod auth;
pub mod client;
pub mod models;

pub use auth::TokenProvider;
pub use client::ApiClient;
