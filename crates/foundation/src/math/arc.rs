use super::SurfacePoint;

/// Outward scale applied to the chord midpoint to get the Bézier control point.
pub const DEFAULT_ARC_BULGE: f64 = 1.2;
/// 50 segments, both endpoints included.
pub const DEFAULT_ARC_SAMPLES: usize = 51;

/// Shape parameters for route arcs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcParams {
    pub bulge: f64,
    pub samples: usize,
}

impl ArcParams {
    pub const fn new(bulge: f64, samples: usize) -> Self {
        Self { bulge, samples }
    }

    pub fn build(&self, from: SurfacePoint, to: SurfacePoint) -> Vec<SurfacePoint> {
        build_arc_with_bulge(from, to, self.samples, self.bulge)
    }
}

impl Default for ArcParams {
    fn default() -> Self {
        Self::new(DEFAULT_ARC_BULGE, DEFAULT_ARC_SAMPLES)
    }
}

/// Samples a quadratic Bézier from `from` to `to`, bowed away from the sphere
/// center so the segment does not cut through the globe.
pub fn build_arc(from: SurfacePoint, to: SurfacePoint, samples: usize) -> Vec<SurfacePoint> {
    build_arc_with_bulge(from, to, samples, DEFAULT_ARC_BULGE)
}

/// Points are evenly spaced in the curve parameter, not in arc length.
pub fn build_arc_with_bulge(
    from: SurfacePoint,
    to: SurfacePoint,
    samples: usize,
    bulge: f64,
) -> Vec<SurfacePoint> {
    match samples {
        0 => return Vec::new(),
        1 => return vec![from],
        _ => {}
    }

    let control = from.lerp(to, 0.5) * bulge;
    let segments = (samples - 1) as f64;

    (0..samples)
        .map(|i| {
            let t = i as f64 / segments;
            let u = 1.0 - t;
            from * (u * u) + control * (2.0 * u * t) + to * (t * t)
        })
        .collect()
}
