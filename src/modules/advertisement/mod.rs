pub mod repository;
mod routes;

pub use routes::get_router;

/// Client-writable fields, in the order field errors are reported.
pub const FIELDS: [&str; 3] = ["header", "description", "author"];

pub const NOT_FOUND: &str = "Advertisement not found";
pub const DUPLICATE_HEADER: &str = "Advertisement header already exists";
