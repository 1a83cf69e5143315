//! Fixed-step semi-implicit (symplectic) Euler integrator
//!
//! Velocity is kicked first and the *updated* velocity drives the position
//! drift. This is not leapfrog; results and orbit stability depend on the
//! exact ordering, so keep it.

use super::forces::accumulate_forces;
use super::states::{Body, NVec2, Universe};

impl Body {
    /// Advance this body by `dt` seconds under the net force `f`
    ///
    /// Zero mass is not checked: `f / m` becomes Inf or NaN and propagates
    /// into the state from then on.
    pub fn apply_force(&mut self, f: NVec2, dt: f64) {
        // a = F / m
        let a = f / self.m;

        // v_n+1 = v_n + a dt
        self.v += a * dt;

        // x_n+1 = x_n + v_n+1 dt
        self.x += self.v * dt;
    }
}

/// Advance every body of `universe` by `dt`
///
/// All net forces are computed from the pre-step state before any body
/// moves. `dt` may be zero or negative.
pub fn euler_step(universe: &mut Universe, dt: f64) {
    let n = universe.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // f[i] holds the net force on body i at time t_n
    let mut forces = vec![NVec2::zeros(); n];
    accumulate_forces(&universe.bodies, &mut forces);

    for (b, f) in universe.bodies.iter_mut().zip(forces.iter()) {
        b.apply_force(*f, dt);
    }

    log::trace!("stepped {} bodies by {} s", n, dt);
}

impl Universe {
    /// Advance the whole universe by one step of `dt` seconds
    pub fn step(&mut self, dt: f64) {
        euler_step(self, dt);
    }
}
