//! REST clients for the hosted Appwrite backend.
//!
//! Two services back the catalog: the Databases service (one document per
//! catalog entry) and the Storage service (uploaded image/video blobs,
//! addressable by a generated id and exposed via a public view URL).
//!
//! Clients are explicitly constructed from an [`AppwriteConfig`] -- no
//! module-level globals, no embedded credentials -- and implement the
//! `aniop-core` store traits so the rest of the system never sees Appwrite
//! wire details.

pub mod config;
pub mod databases;
pub mod error;
mod http;
pub mod storage;

pub use config::AppwriteConfig;
pub use databases::Databases;
pub use error::AppwriteError;
pub use storage::Storage;
