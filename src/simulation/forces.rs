//! Direct all-pairs Newtonian gravity
//!
//! Forces (not accelerations) are accumulated per body; the integrator
//! divides by mass when it applies them. No softening: coincident bodies
//! contribute exactly zero instead.

use crate::simulation::error::{Result, SimError};
use crate::simulation::states::{Body, NVec2, Universe};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Gravitational constant
pub const G: f64 = 6.67e-11;

/// Force exerted on `body` by `other`
///
/// Points from `body` toward `other` for masses of equal sign. A negative
/// mass flips the sign of the product and so turns attraction into
/// repulsion; nothing special-cases it.
pub fn pairwise_force(body: &Body, other: &Body) -> NVec2 {
    // r points from body to other
    let r = other.x - body.x;
    let d2 = r.dot(&r);
    let d = d2.sqrt();

    if d == 0.0 {
        return NVec2::zeros();
    }

    let magnitude = G * body.m * other.m / d2;
    NVec2::new(magnitude * r.x / d, magnitude * r.y / d)
}

/// Sum of the pairwise forces on body `i` from every other body, in index order
///
/// Fails with `IndexOutOfRange` when `i` is not a body of `bodies`.
pub fn net_force(bodies: &[Body], i: usize) -> Result<NVec2> {
    let bi = bodies.get(i).ok_or(SimError::IndexOutOfRange {
        index: i,
        len: bodies.len(),
    })?;
    Ok(sum_forces_on(bodies, i, bi))
}

fn sum_forces_on(bodies: &[Body], i: usize, bi: &Body) -> NVec2 {
    bodies
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold(NVec2::zeros(), |acc, (_, bj)| acc + pairwise_force(bi, bj))
}

/// Compute the net force on every body from the current state
/// - `out[i]` is overwritten with the net force on body `i`
///
/// Reads `bodies` only, so no entry can observe another body's update.
pub fn accumulate_forces(bodies: &[Body], out: &mut [NVec2]) {
    debug_assert_eq!(bodies.len(), out.len());

    #[cfg(feature = "parallel")]
    out.par_iter_mut()
        .zip(bodies.par_iter())
        .enumerate()
        .for_each(|(i, (f, bi))| *f = sum_forces_on(bodies, i, bi));

    #[cfg(not(feature = "parallel"))]
    for (i, (f, bi)) in out.iter_mut().zip(bodies).enumerate() {
        *f = sum_forces_on(bodies, i, bi);
    }
}

impl Universe {
    /// Net force on body `index` from the current state
    pub fn net_force(&self, index: usize) -> Result<NVec2> {
        net_force(&self.bodies, index)
    }
}
