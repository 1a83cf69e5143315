//! Core state types for the N-body simulation.
//!
//! - `Body`     one point mass: position, velocity, mass and an opaque label
//! - `Universe` the ordered collection of bodies plus the display extent
//!
//! Both use `NVec2` (nalgebra `Vector2<f64>`) for kinematic state.

use nalgebra::Vector2;

use super::error::{Result, SimError};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Body {
    pub(crate) x: NVec2, // position
    pub(crate) v: NVec2, // velocity
    pub(crate) m: f64, // mass (signed, negative mass repels)
    pub(crate) label: String, // opaque identifier, unused by physics
}

impl Body {
    /// `label` should be one non-empty token with no whitespace, otherwise
    /// the body will not decode again after encoding (see `check_label`).
    pub fn new(x: NVec2, v: NVec2, m: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            v,
            m,
            label: label.into(),
        }
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The body collection being simulated.
///
/// `extent` is the universe radius. Physics never reads it; it only tells a
/// renderer how to scale coordinates onto a display surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Universe {
    pub(crate) bodies: Vec<Body>,
    pub(crate) extent: f64,
}

impl Universe {
    /// Empty universe with zero extent
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bodies(bodies: Vec<Body>, extent: f64) -> Self {
        Self { bodies, extent }
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Bounds-checked access to body `index`
    pub fn body(&self, index: usize) -> Result<&Body> {
        self.bodies.get(index).ok_or(SimError::IndexOutOfRange {
            index,
            len: self.bodies.len(),
        })
    }
}
