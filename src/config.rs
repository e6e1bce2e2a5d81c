// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tunables for the layout engine.
//!
//! All values have defaults; a JSON config only needs the fields it overrides.

use std::fmt;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Offset of the first padding level, pulled back so stacked edges center on a lane.
pub const PADDING_JUNCTIONS: f64 = 30.0;
/// Distance between two stacked edges sharing a lane.
pub const OFFSET_JUNCTIONS: f64 = 10.0;
/// Emphasis given to edges that do not descend (loops and back edges).
pub const BACK_EDGE_EMPHASIS: f64 = 0.2;

pub const DEFAULT_LANE_WIDTH: f64 = 60.0;
pub const DEFAULT_LANE_HEIGHT: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub padding_junctions: f64,
    pub offset_junctions: f64,
    pub back_edge_emphasis: f64,
    /// Width of the routing lanes between vertex columns.
    pub lane_width: f64,
    /// Height of the routing lanes between vertex rows.
    pub lane_height: f64,
    pub min_cell_width: f64,
    pub min_cell_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding_junctions: PADDING_JUNCTIONS,
            offset_junctions: OFFSET_JUNCTIONS,
            back_edge_emphasis: BACK_EDGE_EMPHASIS,
            lane_width: DEFAULT_LANE_WIDTH,
            lane_height: DEFAULT_LANE_HEIGHT,
            min_cell_width: 1.0,
            min_cell_height: 1.0,
        }
    }
}

impl LayoutConfig {
    /// Parses and validates a config.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&raw)
    }

    /// Checks the values the layout relies on.
    ///
    /// Stacked edges only get distinct offsets when `offset_junctions` is
    /// positive, and lanes and cells need a positive size for coordinates to
    /// increase along the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("padding_junctions", self.padding_junctions),
            ("back_edge_emphasis", self.back_edge_emphasis),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid { field, value });
            }
        }

        let positive = [
            ("offset_junctions", self.offset_junctions),
            ("lane_width", self.lane_width),
            ("lane_height", self.lane_height),
            ("min_cell_width", self.min_cell_width),
            ("min_cell_height", self.min_cell_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        Ok(())
    }

    /// Real offset of a padding level.
    pub fn padding_offset(&self, level: u32) -> f64 {
        -self.padding_junctions + f64::from(level) * self.offset_junctions
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read layout config: {err}"),
            Self::Parse(err) => write!(f, "invalid layout config: {err}"),
            Self::Invalid { field, value } => {
                write!(f, "invalid layout config: `{field}` cannot be {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}
