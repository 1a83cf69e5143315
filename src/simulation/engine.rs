//! Fixed-step run loop
//!
//! Steps a `Universe` by `dt` until the elapsed time reaches `t_end`,
//! handing each new state to an observer (a renderer, a logger, a test).

use super::error::Result;
use super::params::Parameters;
use super::states::Universe;

/// Run `universe` to `params.t_end`, calling `observe(universe, elapsed)`
/// after every step. Returns the number of steps taken.
///
/// The clock advances after the step, so the final step may overshoot
/// `t_end` by less than `dt`.
pub fn run<F>(universe: &mut Universe, params: &Parameters, mut observe: F) -> Result<usize>
where
    F: FnMut(&Universe, f64),
{
    params.validate()?;

    let mut elapsed = 0.0;
    let mut steps = 0;
    while elapsed < params.t_end {
        universe.step(params.dt);
        elapsed += params.dt;
        steps += 1;
        observe(universe, elapsed);
    }

    log::debug!("ran {} steps of {} s", steps, params.dt);
    Ok(steps)
}
