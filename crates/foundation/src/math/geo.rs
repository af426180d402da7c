use super::Vec3;

/// Radius of the unit globe mesh.
pub const GLOBE_RADIUS: f64 = 1.0;

/// Geographic coordinate in degrees.
///
/// Values outside `[-90, 90]` / `[-180, 180]` are not rejected; they still
/// project to a deterministic point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A point on (radius 1) or above (radius > 1) the globe.
pub type SurfacePoint = Vec3;

/// Projects a geographic coordinate onto a sphere of `radius` centered at the
/// origin, with +Y through the north pole and longitude -180 at theta = 0.
pub fn project(coord: GeoCoordinate, radius: f64) -> SurfacePoint {
    let phi = (90.0 - coord.latitude).to_radians();
    let theta = (coord.longitude + 180.0).to_radians();

    let sin_phi = phi.sin();
    Vec3::new(
        -radius * sin_phi * theta.cos(),
        radius * phi.cos(),
        radius * sin_phi * theta.sin(),
    )
}

pub fn project_surface(coord: GeoCoordinate) -> SurfacePoint {
    project(coord, GLOBE_RADIUS)
}
