pub mod fields;
pub mod timestamp;
