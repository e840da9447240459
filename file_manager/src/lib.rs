pub mod aws_config;
pub mod aws_credentials;
pub mod current;
pub mod error;
pub mod fields;
pub mod mutator;
pub mod paths;
pub mod profile_store;
pub mod serde_support;
pub mod switch;
pub mod validation;

pub use error::{DocumentKind, StoreError};
pub use paths::AwsPaths;
pub use profile_store::ProfileStore;
