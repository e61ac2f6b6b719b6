use clap::Parser;
use folio_db::EncryptionMode;
use std::path::PathBuf;

/// Apply one SQL migration file to a PostgreSQL database over TLS.
///
/// Every option falls back to its environment variable, which may also come
/// from a `.env` file in the working directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "folio", version)]
pub struct Cli {
    /// postgres:// connection URL; its parts override the individual options
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database server address
    #[arg(long, env = "PGHOST")]
    pub host: Option<String>,

    #[arg(long, env = "PGPORT", default_value_t = folio_db::params::DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "PGUSER", default_value = "postgres")]
    pub user: String,

    #[arg(long, env = "PGPASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long, env = "PGDATABASE", default_value = "postgres")]
    pub database: String,

    /// TLS mode: require, verify-ca or verify-full
    #[arg(long = "sslmode", env = "PGSSLMODE", default_value = "require")]
    pub sslmode: EncryptionMode,

    /// CA certificate used by the verify-* modes
    #[arg(long = "sslrootcert", env = "PGSSLROOTCERT")]
    pub sslrootcert: Option<PathBuf>,

    /// Migration file, submitted to the server as a single unit
    #[arg(long, env = "FOLIO_MIGRATION_FILE", default_value = "migration.sql")]
    pub file: PathBuf,

    /// Execute inside a transaction, then roll it back
    #[arg(long)]
    pub dry_run: bool,

    /// Log filter for diagnostics on stderr (e.g. warn, info, folio_db=debug)
    #[arg(long, env = "FOLIO_LOG", default_value = "warn")]
    pub log_level: String,
}
