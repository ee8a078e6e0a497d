// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tunables for topology queries, loaded from environment variables or serde.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::dihedral_cos_threshold;

/// Environment variable overriding [`TopologyConfig::fold_angle_deg`].
pub const FOLD_ANGLE_ENV: &str = "SURFACE_TOPOLOGY_FOLD_ANGLE_DEG";

/// Default dihedral angle (degrees) at which an edge counts as a fold.
pub const DEFAULT_FOLD_ANGLE_DEG: f32 = 60.0;

/// Query configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    /// Minimum angle between the normals of the two triangles sharing an edge
    /// for that edge to be traced as part of a fold.
    pub fold_angle_deg: f32,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            fold_angle_deg: DEFAULT_FOLD_ANGLE_DEG,
        }
    }
}

impl TopologyConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing, unparsable or out-of-range values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(FOLD_ANGLE_ENV).ok().as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Self {
        let parsed = raw.and_then(|s| s.trim().parse::<f32>().ok());
        match parsed.map(|fold_angle_deg| Self { fold_angle_deg }.validated()) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                tracing::warn!(var = FOLD_ANGLE_ENV, error = %e, "Ignoring fold angle override");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Parses a configuration from JSON; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        config.validated()
    }

    /// Returns `self` if every value is in range.
    pub fn validated(self) -> Result<Self> {
        let angle = self.fold_angle_deg;
        if !angle.is_finite() || angle <= 0.0 || angle > 180.0 {
            return Err(Error::Config(format!(
                "fold_angle_deg must be in (0, 180], got {angle}"
            )));
        }
        Ok(self)
    }

    /// Normal dot product below which an edge qualifies as a fold.
    pub fn fold_dot_threshold(&self) -> f32 {
        dihedral_cos_threshold(self.fold_angle_deg)
    }
}
