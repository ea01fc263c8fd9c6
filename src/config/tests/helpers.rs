//! Shared test helpers for configuration tests.

use std::ffi::OsString;

use ortho_config::{MergeComposer, OrthoConfig};
use serde_json::Value;

use crate::ReframeConfig;

/// Applies a configuration layer to the composer based on the layer type.
pub fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

/// Helper to compose a [`ReframeConfig`] from a sequence of `(layer_type, value)` pairs.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> ReframeConfig {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value.clone());
    }

    ReframeConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// Loads a [`ReframeConfig`] from real command-line arguments.
///
/// `HOME` and `XDG_CONFIG_HOME` point at an empty temporary directory and
/// the `REFRAME_` variables these tests touch are cleared, so only the
/// defaults and `cli_args` contribute.
pub fn load_from_args(cli_args: &[&str]) -> ReframeConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let _guard = env_lock::lock_env([
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
        ("REFRAME_API_URL", None),
        ("REFRAME_PROVIDER", None),
        ("REFRAME_PROBLEM", None),
        ("REFRAME_THEME", None),
        ("REFRAME_THEMES", None),
        ("REFRAME_NUM_EXAMPLES", None),
        ("REFRAME_RETRY_POLICY", None),
    ]);

    let mut args: Vec<OsString> = vec![OsString::from("reframe")];
    args.extend(cli_args.iter().map(OsString::from));

    ReframeConfig::load_from_iter(args).expect("config should load")
}
