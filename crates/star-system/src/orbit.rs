//! Keplerian orbit shape and plane.
//!
//! The generator only sets shape and plane; positions are evaluated on
//! demand. Everything here is `f64` since no value feeds back into body
//! identity.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use units::constants::GRAVITATIONAL_CONSTANT;

const KEPLER_ITERATIONS: usize = 32;
const KEPLER_TOLERANCE: f64 = 1e-12;

/// Rotation by `angle` radians about the x axis.
pub fn rotate_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
}

/// Rotation by `angle` radians about the y axis.
pub fn rotate_y(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
}

/// Rotation by `angle` radians about the z axis.
pub fn rotate_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
}

/// An elliptical orbit around a primary or a barycentre, in SI units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orbit {
    /// Metres.
    semi_major_axis: f64,
    eccentricity: f64,
    /// Radians of mean anomaly at t = 0.
    orbital_phase_at_start: f64,
    /// Seconds; zero for an unset orbit.
    period: f64,
    plane: Matrix3<f64>,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            semi_major_axis: 0.0,
            eccentricity: 0.0,
            orbital_phase_at_start: 0.0,
            period: 0.0,
            plane: Matrix3::identity(),
        }
    }
}

fn kepler_period(semi_major_axis: f64, total_mass: f64) -> f64 {
    if semi_major_axis <= 0.0 || total_mass <= 0.0 {
        return 0.0;
    }
    TAU * (semi_major_axis.powi(3) / (GRAVITATIONAL_CONSTANT * total_mass)).sqrt()
}

impl Orbit {
    /// Shape of a body orbiting a fixed primary.
    ///
    /// # Arguments
    /// * `semi_major_axis` - Metres
    /// * `total_mass` - Kilograms of the primary (plus body, if significant)
    /// * `eccentricity` - In `[0, 1)`
    pub fn set_shape_around_primary(&mut self, semi_major_axis: f64, total_mass: f64, eccentricity: f64) {
        self.semi_major_axis = semi_major_axis;
        self.eccentricity = eccentricity;
        self.period = kepler_period(semi_major_axis, total_mass);
    }

    /// Shape of one member of a pair orbiting their common barycentre.
    ///
    /// `semi_major_axis` is this member's distance from the barycentre; the
    /// period follows from the full separation implied by the mass split.
    pub fn set_shape_around_barycentre(
        &mut self,
        semi_major_axis: f64,
        total_mass: f64,
        body_mass: f64,
        eccentricity: f64,
    ) {
        self.semi_major_axis = semi_major_axis;
        self.eccentricity = eccentricity;
        let other_mass = total_mass - body_mass;
        let separation = if other_mass > 0.0 {
            semi_major_axis * total_mass / other_mass
        } else {
            semi_major_axis
        };
        self.period = kepler_period(separation, total_mass);
    }

    pub fn set_plane(&mut self, plane: Matrix3<f64>) {
        self.plane = plane;
    }

    pub fn set_phase(&mut self, phase: f64) {
        self.orbital_phase_at_start = phase;
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn orbital_phase_at_start(&self) -> f64 {
        self.orbital_phase_at_start
    }

    pub fn plane(&self) -> &Matrix3<f64> {
        &self.plane
    }

    /// Orbital period in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Solve Kepler's equation `M = E - e sin E` by Newton iteration.
    fn eccentric_anomaly(&self, mean_anomaly: f64) -> f64 {
        let e = self.eccentricity;
        let mut anomaly = if e > 0.8 { PI } else { mean_anomaly };
        for _ in 0..KEPLER_ITERATIONS {
            let delta = (anomaly - e * anomaly.sin() - mean_anomaly) / (1.0 - e * anomaly.cos());
            anomaly -= delta;
            if delta.abs() < KEPLER_TOLERANCE {
                break;
            }
        }
        anomaly
    }

    /// Position relative to the primary (or barycentre) at time `t` seconds,
    /// in metres.
    pub fn orbital_position_at_time(&self, t: f64) -> Vector3<f64> {
        if self.period <= 0.0 {
            return self.plane * Vector3::new(self.semi_major_axis, 0.0, 0.0);
        }
        let mean_anomaly = (TAU * t / self.period + self.orbital_phase_at_start).rem_euclid(TAU);
        let anomaly = self.eccentric_anomaly(mean_anomaly);

        let e = self.eccentricity;
        let a = self.semi_major_axis;
        let x = a * (anomaly.cos() - e);
        let y = a * (1.0 - e * e).sqrt() * anomaly.sin();
        self.plane * Vector3::new(x, y, 0.0)
    }
}
