use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use medtrack_core::{
    domain::common::{DatabaseConfig, MedtrackConfig, OpenFdaConfig},
    infrastructure::openfda::openfda_client::DEFAULT_OPENFDA_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "medtrack", version, about = "Medication and drug reaction tracker")]
pub struct Args {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub openfda: OpenFdaArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[command(flatten)]
    pub tls: TlsArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct TlsArgs {
    #[arg(long = "tls-cert-path", env = "TLS_CERT_PATH", requires = "key_path")]
    pub cert_path: Option<String>,

    #[arg(long = "tls-key-path", env = "TLS_KEY_PATH", requires = "cert_path")]
    pub key_path: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "medtrack")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "medtrack",
        hide_env_values = true
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "medtrack")]
    pub name: String,

    #[arg(
        long = "database-max-connections",
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = 10
    )]
    pub max_connections: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct OpenFdaArgs {
    #[arg(long = "openfda-base-url", env = "OPENFDA_BASE_URL", default_value = DEFAULT_OPENFDA_BASE_URL)]
    pub base_url: String,

    #[arg(long = "openfda-api-key", env = "OPENFDA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "openfda-timeout-secs", env = "OPENFDA_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl From<Args> for MedtrackConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
                max_connections: args.db.max_connections,
            },
            openfda: OpenFdaConfig {
                base_url: args.openfda.base_url,
                api_key: args.openfda.api_key,
                timeout: Duration::from_secs(args.openfda.timeout_secs),
            },
        }
    }
}
