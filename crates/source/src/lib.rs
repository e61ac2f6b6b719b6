pub mod checksum;
pub mod error;
pub mod loader;
pub mod model;

pub use checksum::sha256_hex;
pub use error::SourceError;
pub use loader::load_source;
pub use model::MigrationSource;
