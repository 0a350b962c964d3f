//! TOML settings for the boundary adapter and the command line.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::RenderStyle;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Reject equations that still contain whitespace after trimming.
    #[serde(default = "default_true")]
    pub reject_whitespace: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            reject_whitespace: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub arithmetic: Arithmetic,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub style: RenderStyle,
    /// Fractional digits for float output; shortest round-trip text when unset.
    #[serde(default)]
    pub precision: Option<usize>,
}

/// Number type the whole pipeline runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arithmetic {
    #[default]
    Float,
    Exact,
}

impl FromStr for Arithmetic {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "float" => Ok(Arithmetic::Float),
            "exact" => Ok(Arithmetic::Exact),
            other => Err(format!("unknown arithmetic `{other}` (expected float or exact)")),
        }
    }
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arithmetic::Float => write!(f, "float"),
            Arithmetic::Exact => write!(f, "exact"),
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

fn default_true() -> bool {
    true
}
