pub mod error_boundary;
pub mod origin_guard;
