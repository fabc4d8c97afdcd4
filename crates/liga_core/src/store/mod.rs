// League collection store.
// Plain JSON document with a version envelope and atomic writes.

pub mod error;
pub mod manager;

pub use error::StoreError;
pub use manager::LeagueStore;

pub const STORE_VERSION: u32 = 1;
