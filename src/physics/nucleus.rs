use crate::constants::{NUCLEUS_R0, PACKING_FRACTION};
use crate::error::AtomError;
use crate::physics::sphere::fibonacci_sphere;
use glam::Vec3;
use rand::Rng;
use rand::seq::SliceRandom;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NucleonKind {
    Proton,
    Neutron,
}

#[derive(Clone, Debug)]
pub struct Nucleon {
    pub kind: NucleonKind,
    pub position: Vec3,
}

/// Geometry of a packed nucleus: overall radius, the radius to draw each
/// nucleon at, and the nucleons themselves on the surface lattice.
#[derive(Clone, Debug)]
pub struct NucleusPacking {
    pub nucleus_radius: f32,
    pub particle_radius: f32,
    pub nucleons: Vec<Nucleon>,
}

/// Derives nucleus geometry from nucleon counts and zips a shuffled kind
/// assignment onto the deterministic surface lattice. The shuffle decides
/// which lattice point each proton or neutron lands on; the point set itself
/// never varies.
pub fn pack<R: Rng>(
    proton_count: usize,
    neutron_count: usize,
    rng: &mut R,
) -> Result<NucleusPacking, AtomError> {
    let mass_number = proton_count + neutron_count;
    if mass_number == 0 {
        return Err(AtomError::DegenerateAtom);
    }

    // Empirical radius law r = r0 * A^(1/3).
    let nucleus_radius = NUCLEUS_R0 * (mass_number as f32).cbrt();

    // Back out a per-nucleon radius so A spheres at the close-packing
    // fraction account for the nucleus volume.
    let nucleus_volume = 4.0 / 3.0 * PI * nucleus_radius.powi(3);
    let particle_volume = nucleus_volume / (mass_number as f32 * PACKING_FRACTION);
    let particle_radius = (3.0 * particle_volume / (4.0 * PI)).cbrt();

    let positions = fibonacci_sphere(mass_number, nucleus_radius);

    let mut kinds: Vec<NucleonKind> = Vec::with_capacity(mass_number);
    kinds.extend(std::iter::repeat(NucleonKind::Proton).take(proton_count));
    kinds.extend(std::iter::repeat(NucleonKind::Neutron).take(neutron_count));
    kinds.shuffle(rng);

    let nucleons = kinds
        .into_iter()
        .zip(positions)
        .map(|(kind, position)| Nucleon { kind, position })
        .collect();

    Ok(NucleusPacking {
        nucleus_radius,
        particle_radius,
        nucleons,
    })
}
