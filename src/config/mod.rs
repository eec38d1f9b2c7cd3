/// Store location, per-request connections and table creation
pub mod database;

/// Server and storage settings from config.toml and the environment
pub mod settings;
