use glam::Vec3;

/// Quasi-uniform placement of `n` points on a sphere of the given radius
/// using the Fibonacci lattice (golden-angle increment).
///
/// Deterministic: the same `(n, radius)` always yields the same points, in
/// the same order. `n == 1` degenerates to a single point at the pole.
pub fn fibonacci_sphere(n: usize, radius: f32) -> Vec<Vec3> {
    if n == 0 {
        return Vec::new();
    }

    let golden_angle = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
    let mut points = Vec::with_capacity(n);

    for i in 0..n {
        let y = i as f32 * (2.0 / n as f32) - 1.0 + 1.0 / n as f32;
        let ring = (1.0 - y * y).max(0.0).sqrt();
        let phi = golden_angle * i as f32;
        points.push(Vec3::new(phi.cos() * ring, phi.sin() * ring, y) * radius);
    }

    points
}
