use std::f64::consts::TAU;

use anyhow::{ensure, Result};
use geo::{LineString, Point, Polygon};
use log::debug;

use super::{distance, offset, PolygonFeature};

pub const DEFAULT_SEGMENTS: usize = 32;


/// A circle on the sphere: every boundary point is `radius` meters of arc from `center`.
#[derive(Clone, Debug)]
pub struct GeoCircle {
    center: Point,
    radius: f64,
}

impl GeoCircle {
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        ensure!(center.x().is_finite() && center.y().is_finite(), "Center {center:?} is not a finite coordinate");
        ensure!((-90.0..=90.0).contains(&center.y()), "Center latitude {} is outside of [-90, 90]", center.y());
        ensure!(radius.is_finite(), "Radius {radius} is not finite");
        ensure!(radius >= 0.0, "Radius should not be negative, got {radius}");

        Ok(Self {
            center,
            radius,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Closed ring of `segments + 1` points, starting due north and sweeping clockwise.
    pub fn ring(&self, segments: usize) -> Result<LineString> {
        ensure!(segments > 0, "Segment count should be positive");

        let mut boundary: Vec<Point> = (0..segments)
            .map(|i| TAU * i as f64 / segments as f64)
            .map(|bearing| offset(self.center, self.radius, bearing))
            .collect();

        boundary.push(boundary[0]);

        debug!(
            "Ring around {:?}: radius {} m, {} segments, first vertex at {} m",
            self.center.x_y(), self.radius, segments, distance(self.center, boundary[0]),
        );

        Ok(LineString::from(boundary))
    }

    pub fn into_polygon(self, segments: Option<usize>) -> Result<PolygonFeature> {
        let ring = self.ring(segments.unwrap_or(DEFAULT_SEGMENTS))?;
        Ok(PolygonFeature::new(Polygon::new(ring, vec![])))
    }
}


/// Approximate the circle of `radius` meters around `center` with a polygon feature.
///
/// `segment_count` defaults to [`DEFAULT_SEGMENTS`]. A zero segment count, a negative
/// radius or an out-of-range center are rejected.
pub fn circle_to_polygon(center: Point, radius: f64, segment_count: Option<usize>) -> Result<PolygonFeature> {
    GeoCircle::new(center, radius)?.into_polygon(segment_count)
}
