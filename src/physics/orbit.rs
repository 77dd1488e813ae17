use crate::constants::ORBIT_ANGULAR_SPEED;
use glam::{Quat, Vec3};
use rand::Rng;
use rand_distr::UnitSphere;
use std::collections::BTreeMap;
use std::f32::consts::TAU;

/// Orbital state for a single electron. The axis and `rot_angle` are shared
/// by every electron in a shell; only `phase` differs, so a shell reads as a
/// tilted ring rather than an independent point cloud.
#[derive(Clone, Debug)]
pub struct Electron {
    pub shell: usize,
    pub orbit_radius: f32,
    pub axis: Vec3,
    pub rot_angle: f32,
    pub phase: f32,
    pub position: Vec3,
}

/// Orbit radius for a 0-indexed shell, scaled off the nucleus size. Strictly
/// increasing in the shell index.
pub fn orbit_radius(shell: usize, nucleus_radius: f32) -> f32 {
    (shell as f32 + 1.0 + nucleus_radius) * 2.0
}

/// Builds orbital records for every electron across the given shells. One
/// random tilt (axis + angle) is drawn per shell; phase offsets spread the
/// shell's electrons evenly around the ring.
pub fn layout_shells<R: Rng>(
    shell_counts: &[usize],
    nucleus_radius: f32,
    rng: &mut R,
) -> Vec<Electron> {
    let mut electrons = Vec::with_capacity(shell_counts.iter().sum());

    for (shell, &count) in shell_counts.iter().enumerate() {
        if count == 0 {
            continue;
        }

        let radius = orbit_radius(shell, nucleus_radius);
        let axis: [f32; 3] = rng.sample(UnitSphere);
        let axis = Vec3::from_array(axis);
        let rot_angle = rng.gen_range(0.0..TAU);

        for i in 0..count {
            let phase = i as f32 / count as f32 * TAU;
            let position = ring_position(radius, phase, axis, rot_angle);
            electrons.push(Electron {
                shell,
                orbit_radius: radius,
                axis,
                rot_angle,
                phase,
                position,
            });
        }
    }

    electrons
}

/// Point at `angle` on the orbit circle in the X-Y plane, then tilted by
/// rotating about `axis` by `tilt`.
fn ring_position(radius: f32, angle: f32, axis: Vec3, tilt: f32) -> Vec3 {
    let base = Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0);
    Quat::from_axis_angle(axis, tilt) * base
}

/// Animated position at `time`. When `coupled` is set, revolution and plane
/// precession share the same angle, which gives the rings their wobbling
/// look; with it cleared the plane stays at the shell's fixed tilt.
pub fn animated_position(electron: &Electron, time: f32, coupled: bool) -> Vec3 {
    let angle = time * ORBIT_ANGULAR_SPEED + electron.phase;
    let tilt = if coupled { angle } else { electron.rot_angle };
    ring_position(electron.orbit_radius, angle, electron.axis, tilt)
}

/// Recovers the shell index from an orbit radius. The flattened re-layout
/// groups electrons by the radius of the ring they sit on rather than
/// trusting stored indices.
pub fn infer_shell(orbit_radius: f32, nucleus_radius: f32) -> usize {
    (orbit_radius / 2.0 - 1.0 - nucleus_radius).round().max(0.0) as usize
}

/// Statically re-spaces electrons shell by shell onto the shared X-Y plane.
/// Phase offsets are overwritten with the even spacing and every axis is
/// reset to +Z; positions hold still until the next animated update.
pub fn flatten(electrons: &mut [Electron], nucleus_radius: f32) {
    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, electron) in electrons.iter().enumerate() {
        groups
            .entry(infer_shell(electron.orbit_radius, nucleus_radius))
            .or_default()
            .push(i);
    }

    for members in groups.values() {
        let count = members.len();
        for (i, &idx) in members.iter().enumerate() {
            let electron = &mut electrons[idx];
            let phase = i as f32 / count as f32 * TAU;
            electron.phase = phase;
            electron.axis = Vec3::Z;
            electron.position = Vec3::new(
                electron.orbit_radius * phase.cos(),
                electron.orbit_radius * phase.sin(),
                0.0,
            );
        }
    }
}
