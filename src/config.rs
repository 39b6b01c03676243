//! Configuration loading from pyproject.toml and pathmap.toml.
//!
//! Follows conventions from ruff, black, mypy for familiarity:
//! - `[tool.pathmap]` section in pyproject.toml
//! - Standalone pathmap.toml as fallback
//!
//! ## Example
//!
//! ```toml
//! [tool.pathmap]
//! input = "temp_file_list.txt"
//! output = "project_tree.txt"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Input file used when neither the CLI nor a config file names one.
pub const DEFAULT_INPUT: &str = "temp_file_list.txt";

/// Output file used when neither the CLI nor a config file names one.
pub const DEFAULT_OUTPUT: &str = "project_tree.txt";

/// Pathmap configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source file for this config (for display).
    pub source: Option<PathBuf>,

    /// Input path-list file. Relative paths resolve against the root.
    pub input: Option<PathBuf>,

    /// Output tree file. Relative paths resolve against the root.
    pub output: Option<PathBuf>,
}

/// Raw config as deserialized from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct RawConfig {
    input: Option<String>,
    output: Option<String>,
}

/// Wrapper for pyproject.toml structure.
#[derive(Debug, Deserialize)]
struct PyProject {
    tool: Option<PyProjectTool>,
}

#[derive(Debug, Deserialize)]
struct PyProjectTool {
    pathmap: Option<RawConfig>,
}

impl Config {
    /// Load configuration from the given directory.
    ///
    /// Search order:
    /// 1. pathmap.toml in directory
    /// 2. pyproject.toml [tool.pathmap] in directory
    /// 3. Walk up to find pyproject.toml (like ruff)
    /// 4. Default config if nothing found
    pub fn load(directory: &Path) -> Self {
        // Try pathmap.toml first
        let pathmap_toml = directory.join("pathmap.toml");
        if pathmap_toml.exists() {
            if let Some(config) = Self::load_pathmap_toml(&pathmap_toml) {
                return config;
            }
        }

        // Try pyproject.toml in current directory
        let pyproject = directory.join("pyproject.toml");
        if pyproject.exists() {
            if let Some(config) = Self::load_pyproject(&pyproject) {
                return config;
            }
        }

        // Walk up to find pyproject.toml
        let mut current = directory.to_path_buf();
        while let Some(parent) = current.parent() {
            let pyproject = parent.join("pyproject.toml");
            if pyproject.exists() {
                if let Some(config) = Self::load_pyproject(&pyproject) {
                    return config;
                }
            }
            current = parent.to_path_buf();
        }

        // Default config
        Self::default()
    }

    fn load_pathmap_toml(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let raw: RawConfig = toml::from_str(&content).ok()?;
        Some(Self::from_raw(raw, path.to_path_buf()))
    }

    fn load_pyproject(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let pyproject: PyProject = toml::from_str(&content).ok()?;
        let raw = pyproject.tool?.pathmap?;
        Some(Self::from_raw(raw, path.to_path_buf()))
    }

    fn from_raw(raw: RawConfig, source: PathBuf) -> Self {
        Self {
            source: Some(source),
            input: raw.input.map(PathBuf::from),
            output: raw.output.map(PathBuf::from),
        }
    }

    /// Effective input file: config value or built-in default.
    pub fn input_or_default(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    /// Effective output file: config value or built-in default.
    pub fn output_or_default(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Format config for verbose display.
    pub fn display_summary(&self) -> String {
        let mut lines = Vec::new();

        if let Some(ref source) = self.source {
            lines.push(format!("   Config: {}", source.display()));
        } else {
            lines.push("   Config: (defaults)".to_string());
        }

        lines.push(format!(
            "   Input: {}",
            self.input_or_default().display()
        ));
        lines.push(format!(
            "   Output: {}",
            self.output_or_default().display()
        ));

        lines.join("\n")
    }
}
