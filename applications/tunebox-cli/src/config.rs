/// Catalog configuration loading
use crate::error::Result;
use std::path::{Path, PathBuf};
use tunebox_catalog::CatalogConfig;

/// Prefix for environment overrides, e.g. `TUNEBOX_HISTORY_SIZE=10`
pub const ENV_PREFIX: &str = "TUNEBOX";

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "tunebox.toml";

/// Load configuration from file and environment
///
/// Precedence (highest wins): `TUNEBOX_*` environment variables, then the
/// config file, then [`CatalogConfig::default`]. An explicit `path` must
/// exist; the default `tunebox.toml` is optional.
pub fn load(path: Option<&Path>) -> Result<CatalogConfig> {
    load_with_prefix(path, ENV_PREFIX)
}

/// Same as [`load`] with a custom environment prefix
pub fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<CatalogConfig> {
    let mut settings = ::config::Config::builder();

    settings = match path {
        Some(path) => settings.add_source(::config::File::from(path).required(true)),
        None => settings
            .add_source(::config::File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false)),
    };

    // Keys contain underscores, so nesting uses a double underscore
    settings = settings.add_source(
        ::config::Environment::with_prefix(env_prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config: CatalogConfig = settings.build()?.try_deserialize()?;
    config.validate()?;

    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}
