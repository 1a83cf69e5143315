//! Build a ready-to-run scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`
//! bundling the initial `Universe` with its run `Parameters`.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::error::{FormatError, Result};
use crate::simulation::params::Parameters;
use crate::simulation::snapshot::check_label;
use crate::simulation::states::{Body, NVec2, Universe};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub universe: Universe,
    pub parameters: Option<Parameters>,
}

impl Scenario {
    /// Validate `cfg` the same way the snapshot decoder does and build it
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        check_finite("extent", cfg.extent)?;
        if cfg.extent < 0.0 {
            return Err(FormatError::NegativeExtent(cfg.extent).into());
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .into_iter()
            .map(|bc: BodyConfig| -> Result<Body> {
                for (field, value) in [
                    ("x", bc.x[0]),
                    ("y", bc.x[1]),
                    ("vx", bc.v[0]),
                    ("vy", bc.v[1]),
                    ("mass", bc.m),
                ] {
                    check_finite(field, value)?;
                }
                check_label(&bc.label)?;
                Ok(Body::new(
                    NVec2::new(bc.x[0], bc.x[1]),
                    NVec2::new(bc.v[0], bc.v[1]),
                    bc.m,
                    bc.label,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let parameters = cfg
            .parameters
            .map(|p| Parameters::new(p.t_end, p.dt))
            .transpose()?;

        Ok(Self {
            universe: Universe::with_bodies(bodies, cfg.extent),
            parameters,
        })
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FormatError::NonFinite { field, value }.into())
    }
}
