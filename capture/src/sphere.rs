use crate::common::*;

/// A single capture pose: camera position plus look-at target.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewpoint {
    pub position: Point3<f64>,
    pub look_at: Point3<f64>,
}

/// Evenly distributed points on a sphere around the origin, following a
/// Fibonacci spiral. Deterministic for a fixed `(count, radius)`; no
/// clustering at the poles.
pub fn sphere_points(count: usize, radius: f64) -> Result<Vec<Point3<f64>>> {
    ensure!(radius > 0.0, "radius must be positive");

    let golden_ratio = (1.0 + 5f64.sqrt()) / 2.0;
    let angle_increment = std::f64::consts::TAU * golden_ratio;

    let points = (0..count)
        .map(|index| {
            let t = index as f64 / count as f64;
            let inclination = (1.0 - 2.0 * t).acos();
            let azimuth = angle_increment * index as f64;

            Point3::new(
                radius * inclination.sin() * azimuth.cos(),
                radius * inclination.sin() * azimuth.sin(),
                radius * inclination.cos(),
            )
        })
        .collect();
    Ok(points)
}

/// Sphere viewpoints centered on `target`, all aimed back at it.
pub fn viewpoints(count: usize, radius: f64, target: Point3<f64>) -> Result<Vec<Viewpoint>> {
    let viewpoints = sphere_points(count, radius)?
        .into_iter()
        .map(|point| Viewpoint {
            position: target + point.coords,
            look_at: target,
        })
        .collect();
    Ok(viewpoints)
}
