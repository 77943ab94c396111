//! HTTP access to the profile record store and the experience seed document.

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod operation;
pub(crate) mod record_store;
pub(crate) mod seed;


pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
pub use operation::StoreOperation;
pub use record_store::RecordStore;
pub use seed::{FileSeedSource, HttpSeedSource, SeedSource, seed_source_for};
