//! Camera and transition options with TOML preset support.
//!
//! Options serialize to/from TOML so view presets can be stored on disk, and
//! expose a JSON schema for UI generation.

mod camera;
mod transition;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::CameraError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[transition]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Transition shape, easing and duration.
    pub transition: TransitionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CameraError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded camera options from '{}'", path.display());
        Ok(options)
    }

    /// Parse options from TOML text. Missing fields use defaults; the
    /// result is [validated](Self::validate).
    pub fn from_toml(content: &str) -> Result<Self, CameraError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check camera and transition values.
    pub fn validate(&self) -> Result<(), CameraError> {
        self.camera.validate()?;
        self.transition.validate()
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CameraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("Saved camera options to '{}'", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::snapshot::ProjectionMode;
    use crate::transition::TransitionShape;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[transition]
ease_in = 0.25
shape = { name = "leaping" }
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.transition.ease_in, 0.25);
        assert_eq!(opts.transition.shape, TransitionShape::Leaping { smart: true });
        // Everything else should be default
        assert_eq!(opts.transition.ease_out, 0.0);
        assert_eq!(opts.camera, CameraOptions::default());
    }

    #[test]
    fn invalid_easing_is_rejected() {
        let toml_str = r"
[transition]
ease_in = 0.75
ease_out = 0.5
";
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, CameraError::InvalidEase { .. }));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let cases = [
            ("[camera]\nfov = 0.0", "fov"),
            ("[camera]\nfov = -30.0", "fov"),
            ("[camera]\nfov = 180.0", "fov"),
            ("[camera]\nfov = nan", "fov"),
            ("[camera]\naspect = 0.0", "aspect"),
            ("[camera]\nradius_max = -1.0", "radius_max"),
            ("[camera]\nfog = inf", "fog"),
            ("[transition]\nduration_ms = -1.0", "duration_ms"),
            ("[transition]\nduration_ms = nan", "duration_ms"),
            ("[transition]\nduration_ms = inf", "duration_ms"),
        ];
        for (toml_str, key) in cases {
            let result = Options::from_toml(toml_str);
            assert!(
                matches!(
                    result,
                    Err(CameraError::InvalidOption { name, .. }) if name == key
                ),
                "{toml_str}: {result:?}"
            );
        }
    }

    #[test]
    fn boundary_values_are_accepted() {
        let opts = Options::from_toml(
            "[camera]\nfov = 10.0\n[transition]\nduration_ms = 0.0",
        )
        .unwrap();
        assert_eq!(opts.camera.fov, 10.0);
        assert_eq!(opts.transition.duration_ms, 0.0);
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[camera\nfov = ").unwrap_err();
        assert!(matches!(err, CameraError::OptionsParse(_)));
    }

    #[test]
    fn transition_function_from_options() {
        let opts = TransitionOptions {
            shape: TransitionShape::LinearSizeRelative,
            ease_in: 0.2,
            ease_out: 0.3,
            duration_ms: 400.0,
        };
        let f = opts.function().unwrap();
        assert_eq!(f.shape, TransitionShape::LinearSizeRelative);
        assert_eq!(f.ease.ease_in(), 0.2);
        assert_eq!(f.ease.ease_out(), 0.3);
    }

    #[test]
    fn camera_options_build_initial_snapshot() {
        let opts = CameraOptions {
            mode: ProjectionMode::Orthographic,
            fov: 90.0,
            ..CameraOptions::default()
        };
        let snapshot = opts.initial_snapshot();
        assert_eq!(snapshot.mode, ProjectionMode::Orthographic);
        assert!((snapshot.fov - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(snapshot.radius <= snapshot.radius_max);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("viso-camera-presets-{}", std::process::id()));
        let opts = Options {
            transition: TransitionOptions {
                shape: TransitionShape::Leaping { smart: false },
                ..TransitionOptions::default()
            },
            ..Options::default()
        };
        opts.save(&dir.join("leap.toml")).unwrap();
        Options::default().save(&dir.join("plain.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["leap", "plain"]);
        assert_eq!(Options::load(&dir.join("leap.toml")).unwrap(), opts);
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(CameraError::Io(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("transition"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fov").is_some());
        assert!(camera.get("radius_max").is_none());
        assert!(camera.get("aspect").is_none());

        let transition = &props["transition"]["properties"];
        assert!(transition.get("ease_in").is_some());
        assert!(transition.get("ease_out").is_some());
        assert!(transition.get("shape").is_some());
    }
}
