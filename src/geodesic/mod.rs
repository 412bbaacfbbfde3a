mod circle;
mod feature;

use geo::Point;

pub use circle::*;
pub use feature::*;

/// Radius of the sphere all geodesic computations run on, in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

#[cfg(test)]
pub const EPSILON: f64 = 0.000000001;


pub trait PointExt: Sized {
    /// Point reached by travelling `radius` meters from `self` along `bearing` (radians).
    fn destination(&self, radius: f64, bearing: f64) -> Self;

    /// Great-circle distance in meters.
    fn distance_on_sphere(&self, other: &Self) -> f64;
}


impl PointExt for Point {
    fn destination(&self, radius: f64, bearing: f64) -> Self {
        let lat = self.y().to_radians();
        let lon = self.x().to_radians();
        let d = radius / EARTH_RADIUS;

        let dest_lat = (lat.sin() * d.cos() + lat.cos() * d.sin() * bearing.cos())
            .clamp(-1.0, 1.0)
            .asin();
        let dest_lon = lon + (bearing.sin() * d.sin() * lat.cos())
            .atan2(d.cos() - lat.sin() * dest_lat.sin());

        Point::new(dest_lon.to_degrees(), dest_lat.to_degrees())
    }

    fn distance_on_sphere(&self, other: &Self) -> f64 {
        let lat1 = self.y().to_radians();
        let lat2 = other.y().to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.x() - self.x()).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS * a.sqrt().min(1.0).asin()
    }
}


/// Geodesic offset of `center` by `radius` meters along `bearing` radians.
pub fn offset(center: Point, radius: f64, bearing: f64) -> Point {
    center.destination(radius, bearing)
}

pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_on_sphere(&b)
}
