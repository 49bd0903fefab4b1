//! Config sources, in precedence order: global file, workspace files, environment.

pub mod global_file;
pub mod workspace_file;

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Environment variable prefix; `IDEAFORGE__PROVIDER__MODEL` sets `provider.model`.
pub const ENV_PREFIX: &str = "IDEAFORGE";

/// Add the environment source; always the highest-precedence layer.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
