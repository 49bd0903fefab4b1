//! Config layering: defaults, global file, workspace files, environment, explicit file.

use crate::integration::test_utils::with_isolated_env;
use ideaforge::config::{ConfigLoader, ProviderType};
use std::fs;
use std::path::Path;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn defaults_apply_without_any_files() {
    with_isolated_env(|temp| {
        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.provider.provider_type, ProviderType::Gemini);
        assert_eq!(config.provider.model, "gemini-2.0-flash");
        assert_eq!(config.library.user, "local");
        assert_eq!(config.logging.output, "stderr");
    });
}

#[test]
fn global_file_is_read_from_xdg_config_home() {
    with_isolated_env(|temp| {
        let global = ConfigLoader::global_config_path().unwrap();
        assert!(global.starts_with(temp.path().join("config-home")));
        write(
            &global,
            "[provider]\nprovider_type = \"openai\"\nmodel = \"gpt-4o-mini\"\n",
        );

        let config = ConfigLoader::load(&temp.path().join("ws")).unwrap();
        assert_eq!(config.provider.provider_type, ProviderType::OpenAI);
        assert_eq!(config.provider.model, "gpt-4o-mini");
    });
}

#[test]
fn workspace_files_override_global_in_order() {
    with_isolated_env(|temp| {
        let workspace = temp.path().join("ws");
        write(
            &ConfigLoader::global_config_path().unwrap(),
            "[provider]\nmodel = \"global-model\"\n[library]\nuser = \"global-user\"\n",
        );
        write(
            &workspace.join("config").join("config.toml"),
            "[provider]\nmodel = \"workspace-model\"\n",
        );
        write(
            &workspace.join("config").join("development.toml"),
            "[library]\nuser = \"dev-user\"\n",
        );

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.provider.model, "workspace-model");
        assert_eq!(config.library.user, "dev-user");
    });
}

#[test]
fn env_name_selects_workspace_override_file() {
    with_isolated_env(|temp| {
        let workspace = temp.path().join("ws");
        write(
            &workspace.join("config").join("development.toml"),
            "[provider]\nmodel = \"dev-model\"\n",
        );
        write(
            &workspace.join("config").join("production.toml"),
            "[provider]\nmodel = \"prod-model\"\n",
        );
        std::env::set_var("IDEAFORGE_ENV", "production");

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.provider.model, "prod-model");
    });
}

#[test]
fn environment_overrides_files() {
    with_isolated_env(|temp| {
        let workspace = temp.path().join("ws");
        write(
            &workspace.join("config").join("config.toml"),
            "[provider]\nmodel = \"workspace-model\"\n",
        );
        std::env::set_var("IDEAFORGE__PROVIDER__MODEL", "env-model");
        std::env::set_var("IDEAFORGE__LIBRARY__USER", "env-user");

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.provider.model, "env-model");
        assert_eq!(config.library.user, "env-user");
    });
}

#[test]
fn explicit_file_replaces_global_and_workspace_files() {
    with_isolated_env(|temp| {
        let workspace = temp.path().join("ws");
        write(
            &ConfigLoader::global_config_path().unwrap(),
            "[library]\nuser = \"global-user\"\n",
        );
        write(
            &workspace.join("config").join("config.toml"),
            "[provider]\nmodel = \"workspace-model\"\n",
        );
        let explicit = temp.path().join("explicit.toml");
        write(
            &explicit,
            "[provider]\nprovider_type = \"ollama\"\nmodel = \"llama3\"\n",
        );

        let config = ConfigLoader::load_from_file(&explicit).unwrap();
        assert_eq!(config.provider.provider_type, ProviderType::Ollama);
        assert_eq!(config.provider.model, "llama3");
        assert_eq!(config.library.user, "local");
    });
}

#[test]
fn invalid_values_are_reported_by_validate() {
    with_isolated_env(|temp| {
        let workspace = temp.path().join("ws");
        write(
            &workspace.join("config").join("config.toml"),
            "[provider]\nprovider_type = \"local\"\nmodel = \"custom\"\n[logging]\nlevel = \"chatty\"\n",
        );

        let config = ConfigLoader::load(&workspace).unwrap();
        let errors = config.validate().unwrap_err();
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(messages.len(), 2, "{:?}", messages);
        assert!(messages[0].contains("endpoint"));
        assert!(messages[1].contains("chatty"));
    });
}
