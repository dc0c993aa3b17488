pub mod connection;
pub mod memory;
pub mod store;
pub mod submissions;

pub use connection::ConnectionManager;
pub use memory::MemorySubmissionStore;
pub use store::{PgSubmissionStore, StoreError, SubmissionStore};
