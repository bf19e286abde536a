//! Celestial body and orbit value types.
//!
//! A [`CelestialBody`] bundles a body's physical constants with an optional
//! [`Orbit`] around its parent, derives its gravitational parameter and
//! sphere of influence once at construction, and answers two pure physics
//! queries. Everything is immutable after construction, so a fully built
//! body can be shared freely across threads behind its `Arc`.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use kerbol_core::angles::normalize_two_pi;
use kerbol_core::constants::{G, HALF_PI, TWO_PI};

/// Keplerian orbital elements of a body around its reference body.
///
/// Pure data: construction performs no validation or computation. The
/// reference body is always present; a body that orbits nothing carries
/// `Option<Orbit>::None` instead of an orbit with a missing parent.
#[derive(Debug, Clone, Serialize)]
pub struct Orbit {
    /// The body being orbited. Shared, not owned; the parent is always
    /// fully constructed before any of its satellites.
    pub reference_body: Arc<CelestialBody>,
    /// Semi-major axis (m).
    pub semi_major_axis_m: f64,
    /// Eccentricity (dimensionless; `0 ≤ e < 1` throughout this catalog).
    pub eccentricity: f64,
    /// Inclination to the reference plane (degrees).
    pub inclination_deg: f64,
    /// Longitude of the ascending node (degrees).
    pub longitude_of_ascending_node_deg: f64,
    /// Argument of periapsis (degrees).
    pub argument_of_periapsis_deg: f64,
    /// Mean anomaly at the catalog epoch (radians).
    pub mean_anomaly_at_epoch_rad: f64,
}

impl Orbit {
    /// Bundle the six orbital elements with the body they are measured
    /// against.
    pub fn new(
        reference_body: Arc<CelestialBody>,
        semi_major_axis_m: f64,
        eccentricity: f64,
        inclination_deg: f64,
        longitude_of_ascending_node_deg: f64,
        argument_of_periapsis_deg: f64,
        mean_anomaly_at_epoch_rad: f64,
    ) -> Self {
        Self {
            reference_body,
            semi_major_axis_m,
            eccentricity,
            inclination_deg,
            longitude_of_ascending_node_deg,
            argument_of_periapsis_deg,
            mean_anomaly_at_epoch_rad,
        }
    }
}

/// One star, planet, or moon.
///
/// The derived fields (`gravitational_parameter_m3_s2`,
/// `sphere_of_influence_m`) are computed exactly once, in
/// [`CelestialBody::new`], and never change afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct CelestialBody {
    /// Catalog name of the body.
    pub name: Arc<str>,
    /// Mass (kg).
    pub mass_kg: f64,
    /// Mean radius (m).
    pub radius_m: f64,
    /// Sidereal rotation period (s); `0` means the body does not rotate.
    pub sidereal_rotation_s: f64,
    /// Orbit around the parent body; `None` only for the root star.
    pub orbit: Option<Orbit>,
    /// Standard gravitational parameter `μ = G · m` (m³/s²).
    pub gravitational_parameter_m3_s2: f64,
    /// Sphere-of-influence radius (m); `None` for the root star.
    pub sphere_of_influence_m: Option<f64>,
}

/// Errors signalled by body construction and the physics queries.
#[derive(Debug, Error)]
pub enum BodyError {
    /// A physical input is outside its valid domain.
    #[error("invalid parameter `{field}` for body `{body}`: {reason}")]
    InvalidParameter {
        body: String,
        field: &'static str,
        reason: &'static str,
    },
    /// The query is not defined for this body.
    #[error("`{operation}` is not supported for non-rotating body `{body}`")]
    UnsupportedOperation {
        body: String,
        operation: &'static str,
    },
}

impl CelestialBody {
    /// Construct a body, validating its physical constants and deriving
    /// `μ` and (for orbiting bodies) the sphere-of-influence radius.
    ///
    /// The SOI formula reads the reference body's mass, so parents must be
    /// constructed before their satellites; the `Arc` in [`Orbit`] makes
    /// that ordering structural rather than a runtime obligation.
    pub fn new(
        name: &str,
        mass_kg: f64,
        radius_m: f64,
        sidereal_rotation_s: f64,
        orbit: Option<Orbit>,
    ) -> Result<Arc<Self>, BodyError> {
        let invalid = |field, reason| BodyError::InvalidParameter {
            body: name.to_string(),
            field,
            reason,
        };
        if !(mass_kg > 0.0 && mass_kg.is_finite()) {
            return Err(invalid("mass_kg", "must be positive and finite"));
        }
        if !(radius_m > 0.0 && radius_m.is_finite()) {
            return Err(invalid("radius_m", "must be positive and finite"));
        }
        if !(sidereal_rotation_s >= 0.0 && sidereal_rotation_s.is_finite()) {
            return Err(invalid("sidereal_rotation_s", "must be non-negative and finite"));
        }

        let sphere_of_influence_m = orbit.as_ref().map(|orbit| {
            orbit.semi_major_axis_m * (mass_kg / orbit.reference_body.mass_kg).powf(0.4)
        });

        Ok(Arc::new(Self {
            name: Arc::from(name),
            mass_kg,
            radius_m,
            sidereal_rotation_s,
            orbit,
            gravitational_parameter_m3_s2: G * mass_kg,
            sphere_of_influence_m,
        }))
    }

    /// Whether this body is the root star (orbits nothing).
    pub fn is_star(&self) -> bool {
        self.orbit.is_none()
    }

    /// The body this one orbits, if any.
    pub fn parent(&self) -> Option<&Arc<CelestialBody>> {
        self.orbit.as_ref().map(|orbit| &orbit.reference_body)
    }

    /// Speed of a circular orbit at `altitude_m` above the surface (m/s).
    ///
    /// Negative altitudes are accepted as long as the orbital radius
    /// `altitude + radius` stays positive; a non-positive radius has no
    /// physical reading and is rejected instead of producing NaN.
    pub fn circular_orbit_velocity(&self, altitude_m: f64) -> Result<f64, BodyError> {
        let orbital_radius_m = altitude_m + self.radius_m;
        if !(orbital_radius_m > 0.0 && orbital_radius_m.is_finite()) {
            return Err(BodyError::InvalidParameter {
                body: self.name.to_string(),
                field: "altitude_m",
                reason: "altitude + radius must be positive and finite",
            });
        }
        Ok((self.gravitational_parameter_m3_s2 / orbital_radius_m).sqrt())
    }

    /// Local sidereal time (radians, in `[0, 2π)`) at `longitude_rad` when
    /// `time_s` seconds have elapsed since the catalog epoch.
    ///
    /// Neither input needs pre-normalization; negative time (before epoch)
    /// and out-of-range longitudes fold into `[0, 2π)`. A body with zero
    /// rotation period has no defined sidereal time, so the query is
    /// rejected rather than dividing by zero.
    pub fn sidereal_time_at(&self, longitude_rad: f64, time_s: f64) -> Result<f64, BodyError> {
        if self.sidereal_rotation_s == 0.0 {
            return Err(BodyError::UnsupportedOperation {
                body: self.name.to_string(),
                operation: "sidereal_time_at",
            });
        }
        let raw = (time_s / self.sidereal_rotation_s) * TWO_PI + HALF_PI + longitude_rad;
        Ok(normalize_two_pi(raw))
    }
}
