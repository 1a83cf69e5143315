pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, Universe, NVec2};
pub use simulation::forces::{G, pairwise_force, net_force, accumulate_forces};
pub use simulation::integrator::euler_step;
pub use simulation::engine::run;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::snapshot::{encode, decode};
pub use simulation::error::{FormatError, SimError, Result};

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::{clock::format_elapsed, viewport::Viewport};

pub use benchmark::benchmark::bench_step;
