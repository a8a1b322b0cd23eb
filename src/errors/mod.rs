pub mod types;

pub use types::FindashError;
