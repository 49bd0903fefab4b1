//! Config loading entry points.

use super::merge::merge_policy;
use super::sources::{self, global_file, workspace_file};
use super::IdeaforgeConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, `config/config.toml`,
    /// `config/{IDEAFORGE_ENV}.toml`, `IDEAFORGE__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<IdeaforgeConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = sources::add_environment(builder);

        let config: IdeaforgeConfig = builder.build()?.try_deserialize()?;
        debug!(
            workspace = %workspace_root.display(),
            provider = %config.provider.provider_type,
            model = %config.provider.model,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from one explicit file, in place of the global and workspace files.
    pub fn load_from_file(path: &Path) -> Result<IdeaforgeConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let builder = sources::add_environment(builder);
        builder.build()?.try_deserialize()
    }

    /// Global config file location, when one can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
