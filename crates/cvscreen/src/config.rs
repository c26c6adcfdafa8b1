//! Configuration handling for cvscreen.
//!
//! All the knobs the pipeline reads: where the labeled dataset and the
//! pipeline artifact live, and the two decision thresholds.

#![allow(dead_code)]

use anyhow::{Context, Result};
use cvscreen_triage::DecisionThresholds;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Labeled dataset CSV
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Persisted pipeline artifact
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Probability threshold for the "Alto" (approve) rule
    #[serde(default = "default_threshold")]
    pub threshold_alto: f64,

    /// Probability threshold for the "Bajo" (auto-reject) rule
    #[serde(default = "default_threshold")]
    pub threshold_bajo: f64,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/cvs_etiquetados.csv")
}

fn default_model_path() -> PathBuf {
    PathBuf::from("cv_pipeline.json")
}

fn default_threshold() -> f64 {
    0.30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            model_path: default_model_path(),
            threshold_alto: default_threshold(),
            threshold_bajo: default_threshold(),
        }
    }
}

impl Config {
    /// Load from the default config file, falling back to defaults when no
    /// file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from an explicit path, or the default location when `None`.
    pub fn load_from(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p),
            None => Self::config_path().filter(|p| p.exists()),
        };

        match path {
            Some(p) => {
                let raw = std::fs::read_to_string(&p)
                    .with_context(|| format!("Failed to read config file {}", p.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("Failed to parse config file {}", p.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Path of the config file in the XDG config directory.
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Print-ready sample configuration.
    pub fn sample_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }

    /// The decision thresholds as the triage layer consumes them.
    pub fn thresholds(&self) -> DecisionThresholds {
        DecisionThresholds {
            alto: self.threshold_alto,
            bajo: self.threshold_bajo,
        }
    }
}

/// Get the XDG config directory for cvscreen.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("CVSCREEN_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }

    ProjectDirs::from("", "", "cvscreen").map(|dirs| dirs.config_dir().to_path_buf())
}
