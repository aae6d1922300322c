// Configuration type definitions

use serde::Deserialize;

use crate::error::ScrollbarError;

/// Geometry of one scroll bar axis
///
/// A `max_positioner_length` of 0 leaves the positioner unrestricted. Equal
/// minimum and maximum pin the positioner to a fixed length (sliders).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AxisDefinition {
    pub min_positioner_length: u32,
    pub max_positioner_length: u32,
    pub leading_margin: u32,
    pub trailing_margin: u32,
}

impl AxisDefinition {
    pub fn validate(&self, section: &str) -> Result<(), ScrollbarError> {
        if self.max_positioner_length != 0
            && self.max_positioner_length < self.min_positioner_length
        {
            return Err(ScrollbarError::InvalidPositionerBounds {
                section: section.to_string(),
                min: self.min_positioner_length,
                max: self.max_positioner_length,
            });
        }
        Ok(())
    }
}

impl Default for AxisDefinition {
    fn default() -> Self {
        AxisDefinition {
            min_positioner_length: 1,
            max_positioner_length: 0,
            leading_margin: 0,
            trailing_margin: 0,
        }
    }
}

/// Scrolling behaviour section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_step_size")]
    pub step_size: u32,
}

fn default_step_size() -> u32 {
    1
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig { step_size: 1 }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub vertical: AxisDefinition,
    #[serde(default)]
    pub horizontal: AxisDefinition,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Config {
    /// Parses and validates a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Config, ScrollbarError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScrollbarError> {
        self.vertical.validate("vertical")?;
        self.horizontal.validate("horizontal")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
