//! Point-mass particle with kinematic state and descriptive attributes
//!
//! A `Particle` is a plain data record: position, velocity and acceleration
//! drive the motion, while color, mass, radius, charge and name are carried
//! along for whoever draws or inspects the particle. None of the fields are
//! range checked.
//!
//! # Integration
//!
//! [`Particle::update`] advances one step of length `dt`:
//!
//! ```text
//! x ← x + v × dt      (uses v from before this step)
//! v ← v + a × dt
//! ```
//!
//! Acceleration is an external input and is never modified here. With a
//! constant acceleration, `n` steps from `(x₀, v₀)` land on
//!
//! ```text
//! vₙ = v₀ + n·a·dt
//! xₙ = x₀ + n·v₀·dt + a·dt²·n(n-1)/2
//! ```

use crate::core_types::vector3::Vector3;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A single point mass
///
/// # Example
///
/// ```
/// use particle_sim_core::{Particle, Vector3};
///
/// let mut p = Particle::new(
///     Vector3::zeros(),                // position
///     Vector3::new(1.0, 0.0, 0.0),     // velocity
///     Vector3::new(0.0, -1.0, 0.0),    // acceleration
///     Vector3::new(1.0, 0.066, 0.0),   // color (RGB)
///     1.0,                             // mass
///     0.5,                             // radius
///     0.0,                             // charge
///     "probe",
/// );
///
/// p.update(1.0);
/// assert_eq!(p.position(), Vector3::new(1.0, 0.0, 0.0));
/// assert_eq!(p.velocity(), Vector3::new(1.0, -1.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    position: Vector3,
    velocity: Vector3,
    acceleration: Vector3,
    /// RGB, not a physical quantity
    color: Vector3,
    mass: f64,
    radius: f64,
    charge: f64,
    name: String,
}

impl Particle {
    /// Create a particle, storing every value verbatim
    #[expect(
        clippy::too_many_arguments,
        reason = "Every field is required at construction and none has a sensible default"
    )]
    pub fn new(
        position: Vector3,
        velocity: Vector3,
        acceleration: Vector3,
        color: Vector3,
        mass: f64,
        radius: f64,
        charge: f64,
        name: impl Into<String>,
    ) -> Self {
        Particle {
            position,
            velocity,
            acceleration,
            color,
            mass,
            radius,
            charge,
            name: name.into(),
        }
    }

    /// Advance position then velocity by `dt`.
    ///
    /// Position moves with the velocity held at the start of the step. `dt`
    /// is not checked: zero leaves the state unchanged and negative values
    /// step backwards.
    pub fn update(&mut self, dt: f64) {
        self.position = self.position + self.velocity * dt;
        self.velocity = self.velocity + self.acceleration * dt;

        trace!(
            name = %self.name,
            dt,
            position = %self.position,
            velocity = %self.velocity,
            "particle advanced"
        );
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector3 {
        self.acceleration
    }

    pub fn color(&self) -> Vector3 {
        self.color
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }

    /// Replace the acceleration used by subsequent updates
    pub fn set_acceleration(&mut self, acceleration: Vector3) {
        self.acceleration = acceleration;
    }

    pub fn set_color(&mut self, color: Vector3) {
        self.color = color;
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    pub fn set_charge(&mut self, charge: f64) {
        self.charge = charge;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe() -> Particle {
        Particle::new(
            Vector3::zeros(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            2.0,
            0.25,
            -1.0,
            "probe",
        )
    }

    #[test]
    fn test_update_uses_pre_step_velocity() {
        let mut p = probe();
        p.update(1.0);

        assert_eq!(p.position(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(p.velocity(), Vector3::new(1.0, -1.0, 0.0));
        assert_eq!(p.acceleration(), Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut p = probe();
        let before = p.clone();
        p.update(0.0);
        assert_eq!(p, before);
    }

    #[test]
    fn test_negative_dt_rewinds_without_acceleration() {
        let mut p = probe();
        p.set_acceleration(Vector3::zeros());
        p.update(2.0);
        p.update(-2.0);
        assert_eq!(p.position(), Vector3::zeros());
        assert_eq!(p.velocity(), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_constructor_stores_values_verbatim() {
        // Negative mass and radius are not rejected
        let p = Particle::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::zeros(),
            Vector3::zeros(),
            Vector3::new(0.2, 0.4, 0.6),
            -5.0,
            -0.1,
            1.6e-19,
            String::from("odd"),
        );
        assert_eq!(p.position(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(p.color(), Vector3::new(0.2, 0.4, 0.6));
        assert_eq!(p.mass(), -5.0);
        assert_eq!(p.radius(), -0.1);
        assert_eq!(p.charge(), 1.6e-19);
        assert_eq!(p.name(), "odd");
    }

    #[test]
    fn test_setters() {
        let mut p = probe();
        p.set_position(Vector3::new(9.0, 9.0, 9.0));
        p.set_velocity(Vector3::new(0.0, 0.0, 1.0));
        p.set_color(Vector3::new(0.0, 1.0, 0.0));
        p.set_mass(3.0);
        p.set_radius(1.5);
        p.set_charge(0.5);
        p.set_name("renamed");

        assert_eq!(p.position(), Vector3::new(9.0, 9.0, 9.0));
        assert_eq!(p.velocity(), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(p.color(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(p.mass(), 3.0);
        assert_eq!(p.radius(), 1.5);
        assert_eq!(p.charge(), 0.5);
        assert_eq!(p.name(), "renamed");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(probe()).unwrap();
        assert_eq!(json["name"], "probe");
        assert_eq!(json["velocity"]["x"], 1.0);
        assert_eq!(json["mass"], 2.0);
    }
}
