//! Configuration types for loading simulation scenarios from YAML.
//!
//! A YAML scenario is an alternative to the plain-text snapshot for setting
//! up a run. It carries the same bodies plus default run parameters:
//!
//! - [`ParametersConfig`] – total simulated time and step size
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   t_end: 157788000.0     # total simulation time (s)
//!   dt: 25000.0            # fixed step size (s)
//!
//! extent: 2.50e+11         # universe radius, display scaling only
//!
//! bodies:
//!   - x: [ 1.4960e+11, 0.0 ]
//!     v: [ 0.0, 2.9800e+04 ]
//!     m: 5.9740e+24
//!     label: earth.gif
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.9890e+30
//!     label: sun.gif
//! ```
//!
//! Command-line arguments override `parameters`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::simulation::error::SimError;

/// Default run parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // total simulated time
    pub dt: f64, // step size
}

/// Initial state of one body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // position
    pub v: [f64; 2], // velocity
    pub m: f64, // mass, may be negative
    pub label: String, // one token, carried through to snapshots untouched
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: Option<ParametersConfig>,
    #[serde(default)]
    pub extent: f64,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
