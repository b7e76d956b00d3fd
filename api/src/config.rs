use clap::Parser;

#[derive(Clone, Parser, Debug, Default)]
#[command(name = "messenger-api")]
#[command(about = "Messenger API Server", long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(flatten)]
    pub server: ServerConfig,
}

#[derive(Clone, Parser, Debug, Default)]
pub struct DatabaseConfig {
    #[arg(
        long = "database-url",
        env = "DATABASE_URL",
        default_value = "sqlite://messenger.db"
    )]
    pub url: String,
}

#[derive(Clone, Parser, Debug, Default)]
pub struct ServerConfig {
    #[arg(long = "server-host", env = "API_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-api-port", env = "API_PORT", default_value = "8080")]
    pub api_port: u16,
}
