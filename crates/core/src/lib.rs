pub mod error;
pub mod pagination;
pub mod params;
pub mod types;
