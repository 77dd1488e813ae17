use crate::constants::{SPIN_SPEED_MAX, SPIN_SPEED_MIN};
use crate::error::AtomError;
use crate::physics::elements::Element;
use crate::physics::nucleus::{self, Nucleon};
use crate::physics::orbit::{self, Electron};
use crate::physics::shells;
use glam::{Quat, Vec3};
use log::debug;
use rand::Rng;
use rand_distr::UnitSphere;

/// Whether electron positions follow the animated orbits or sit in the
/// static flattened arrangement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Animated,
    Flattened,
}

/// The aggregate atom: a spinning nucleus of packed nucleons plus electrons
/// on tilted orbital rings. Topology is fixed at construction; `update` and
/// `arrange_electrons_2d` are the only mutators, and both touch positions
/// and the layout mode alone.
#[derive(Clone, Debug)]
pub struct AtomModel {
    proton_count: usize,
    neutron_count: usize,
    nucleus_radius: f32,
    particle_radius: f32,
    spin_axis: Vec3,
    spin_speed: f32,
    // Lattice positions before the spin orientation is applied.
    nucleon_home: Vec<Vec3>,
    nucleons: Vec<Nucleon>,
    electrons: Vec<Electron>,
    layout: LayoutMode,
    coupled_precession: bool,
}

impl AtomModel {
    /// Builds an atom from raw particle counts, deriving shells from the
    /// electron count. Draws randomness from the thread RNG.
    pub fn new(
        proton_count: usize,
        neutron_count: usize,
        electron_count: usize,
    ) -> Result<Self, AtomError> {
        Self::with_rng(proton_count, neutron_count, electron_count, &mut rand::thread_rng())
    }

    /// `new` with an injected random source, for deterministic construction.
    pub fn with_rng<R: Rng>(
        proton_count: usize,
        neutron_count: usize,
        electron_count: usize,
        rng: &mut R,
    ) -> Result<Self, AtomError> {
        let shell_counts = shells::allocate(electron_count);
        Self::build(proton_count, neutron_count, &shell_counts, rng)
    }

    /// Builds an atom from a periodic table entry. The electron count is the
    /// atomic number; neutrons default from the standard atomic weight. An
    /// explicit shell configuration, when given, is validated against the
    /// electron count and then trusted as-is, caps included.
    pub fn from_element(
        element: &Element,
        neutron_override: Option<usize>,
        shell_config: Option<&[usize]>,
    ) -> Result<Self, AtomError> {
        Self::from_element_with_rng(element, neutron_override, shell_config, &mut rand::thread_rng())
    }

    /// `from_element` with an injected random source.
    pub fn from_element_with_rng<R: Rng>(
        element: &Element,
        neutron_override: Option<usize>,
        shell_config: Option<&[usize]>,
        rng: &mut R,
    ) -> Result<Self, AtomError> {
        let proton_count = usize::from(element.atomic_number);
        let neutron_count = neutron_override.unwrap_or_else(|| element.default_neutron_count());

        let derived;
        let shell_counts: &[usize] = match shell_config {
            Some(config) => {
                shells::validate_config(config, Some(proton_count))?;
                config
            }
            None => {
                derived = shells::allocate(proton_count);
                &derived
            }
        };

        Self::build(proton_count, neutron_count, shell_counts, rng)
    }

    fn build<R: Rng>(
        proton_count: usize,
        neutron_count: usize,
        shell_counts: &[usize],
        rng: &mut R,
    ) -> Result<Self, AtomError> {
        let packing = nucleus::pack(proton_count, neutron_count, rng)?;
        let electrons = orbit::layout_shells(shell_counts, packing.nucleus_radius, rng);

        let spin_axis: [f32; 3] = rng.sample(UnitSphere);
        let spin_axis = Vec3::from_array(spin_axis);
        let spin_speed = rng.gen_range(SPIN_SPEED_MIN..SPIN_SPEED_MAX);

        debug!(
            "built atom: {proton_count}p {neutron_count}n, {} electrons across {} shells, nucleus radius {:.3}",
            electrons.len(),
            shell_counts.len(),
            packing.nucleus_radius,
        );

        let nucleon_home = packing.nucleons.iter().map(|n| n.position).collect();

        Ok(Self {
            proton_count,
            neutron_count,
            nucleus_radius: packing.nucleus_radius,
            particle_radius: packing.particle_radius,
            spin_axis,
            spin_speed,
            nucleon_home,
            nucleons: packing.nucleons,
            electrons,
            layout: LayoutMode::Animated,
            coupled_precession: true,
        })
    }

    /// Advances animation state to the given absolute time. Nucleons rotate
    /// rigidly about the spin axis; electrons follow their orbital rings.
    /// Pure in `time`: repeating a call leaves the model unchanged. Leaves
    /// flattened mode if it was active.
    pub fn update(&mut self, time: f32) {
        self.layout = LayoutMode::Animated;

        let orientation = Quat::from_axis_angle(self.spin_axis, self.spin_speed * time);
        for (nucleon, home) in self.nucleons.iter_mut().zip(&self.nucleon_home) {
            nucleon.position = orientation * *home;
        }

        for electron in &mut self.electrons {
            electron.position = orbit::animated_position(electron, time, self.coupled_precession);
        }
    }

    /// Freezes electrons into the evenly spaced 2D arrangement, shell by
    /// shell on the shared X-Y plane. Idempotent; the next `update` call
    /// resumes animation.
    pub fn arrange_electrons_2d(&mut self) {
        self.layout = LayoutMode::Flattened;
        orbit::flatten(&mut self.electrons, self.nucleus_radius);
    }

    pub fn nucleons(&self) -> &[Nucleon] {
        &self.nucleons
    }

    pub fn electrons(&self) -> &[Electron] {
        &self.electrons
    }

    pub fn proton_count(&self) -> usize {
        self.proton_count
    }

    pub fn neutron_count(&self) -> usize {
        self.neutron_count
    }

    pub fn nucleus_radius(&self) -> f32 {
        self.nucleus_radius
    }

    pub fn particle_radius(&self) -> f32 {
        self.particle_radius
    }

    pub fn spin_axis(&self) -> Vec3 {
        self.spin_axis
    }

    pub fn spin_speed(&self) -> f32 {
        self.spin_speed
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn coupled_precession(&self) -> bool {
        self.coupled_precession
    }

    /// Decouples plane precession from revolution; the orbital plane then
    /// holds the tilt sampled at construction.
    pub fn set_coupled_precession(&mut self, coupled: bool) {
        self.coupled_precession = coupled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::nucleus::NucleonKind;
    use crate::physics::orbit::orbit_radius;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn no_nucleons_is_degenerate() {
        let err = AtomModel::with_rng(0, 0, 3, &mut seeded(0)).unwrap_err();
        assert_eq!(err, AtomError::DegenerateAtom);
    }

    #[test]
    fn no_electrons_is_legal() {
        let atom = AtomModel::with_rng(2, 2, 0, &mut seeded(1)).unwrap();
        assert!(atom.electrons().is_empty());
        assert_eq!(atom.nucleons().len(), 4);
    }

    #[test]
    fn hydrogen_scenario() {
        let atom = AtomModel::with_rng(1, 0, 1, &mut seeded(2)).unwrap();
        assert_eq!(atom.nucleons().len(), 1);
        assert_eq!(atom.nucleons()[0].kind, NucleonKind::Proton);
        assert_eq!(atom.electrons().len(), 1);

        let electron = &atom.electrons()[0];
        assert_eq!(electron.shell, 0);
        let expected = (1.0 + atom.nucleus_radius()) * 2.0;
        assert!((electron.orbit_radius - expected).abs() < 1e-6);
    }

    #[test]
    fn hydrogen_electron_at_time_zero() {
        let mut atom = AtomModel::with_rng(1, 0, 1, &mut seeded(3)).unwrap();
        atom.update(0.0);
        // phase 0 and coupled tilt 0: the rotation is the identity, so the
        // electron sits exactly on the +X axis.
        let electron = &atom.electrons()[0];
        let expected = Vec3::new(electron.orbit_radius, 0.0, 0.0);
        assert!(electron.position.distance(expected) < 1e-5);
    }

    #[test]
    fn carbon_shells() {
        let atom = AtomModel::with_rng(6, 6, 6, &mut seeded(4)).unwrap();
        let inner = atom.electrons().iter().filter(|e| e.shell == 0).count();
        let outer = atom.electrons().iter().filter(|e| e.shell == 1).count();
        assert_eq!((inner, outer), (2, 4));
    }

    #[test]
    fn update_is_pure_in_time() {
        let mut atom = AtomModel::with_rng(8, 8, 8, &mut seeded(5)).unwrap();
        atom.update(0.25);
        atom.update(3.7);
        let nucleons: Vec<_> = atom.nucleons().iter().map(|n| n.position).collect();
        let electrons: Vec<_> = atom.electrons().iter().map(|e| e.position).collect();
        atom.update(3.7);
        let nucleons_again: Vec<_> = atom.nucleons().iter().map(|n| n.position).collect();
        let electrons_again: Vec<_> = atom.electrons().iter().map(|e| e.position).collect();
        assert_eq!(nucleons, nucleons_again);
        assert_eq!(electrons, electrons_again);
    }

    #[test]
    fn arrange_is_idempotent_and_planar() {
        let mut atom = AtomModel::with_rng(10, 10, 10, &mut seeded(6)).unwrap();
        atom.update(1.0);
        atom.arrange_electrons_2d();
        assert_eq!(atom.layout(), LayoutMode::Flattened);
        let first: Vec<_> = atom.electrons().iter().map(|e| e.position).collect();
        assert!(first.iter().all(|p| p.z == 0.0));

        atom.arrange_electrons_2d();
        let second: Vec<_> = atom.electrons().iter().map(|e| e.position).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn update_leaves_flattened_mode() {
        let mut atom = AtomModel::with_rng(3, 4, 3, &mut seeded(7)).unwrap();
        atom.arrange_electrons_2d();
        atom.update(2.0);
        assert_eq!(atom.layout(), LayoutMode::Animated);
    }

    #[test]
    fn nucleus_spin_preserves_lattice_radius() {
        let mut atom = AtomModel::with_rng(6, 6, 0, &mut seeded(8)).unwrap();
        let radii: Vec<f32> = atom.nucleons().iter().map(|n| n.position.length()).collect();
        atom.update(5.3);
        for (nucleon, radius) in atom.nucleons().iter().zip(radii) {
            assert!((nucleon.position.length() - radius).abs() < 1e-5);
        }
    }

    #[test]
    fn element_constructor_defaults() {
        let carbon = Element::by_symbol("C").unwrap();
        let atom = AtomModel::from_element_with_rng(&carbon, None, None, &mut seeded(9)).unwrap();
        assert_eq!(atom.proton_count(), 6);
        assert_eq!(atom.neutron_count(), 6);
        assert_eq!(atom.electrons().len(), 6);
    }

    #[test]
    fn element_constructor_overrides() {
        let carbon = Element::by_symbol("C").unwrap();
        // Carbon-14 with a custom shell split.
        let atom =
            AtomModel::from_element_with_rng(&carbon, Some(8), Some(&[2, 4]), &mut seeded(10))
                .unwrap();
        assert_eq!(atom.neutron_count(), 8);
        assert_eq!(atom.nucleons().len(), 14);

        let bad = AtomModel::from_element_with_rng(&carbon, None, Some(&[2, 3]), &mut seeded(11));
        assert!(matches!(bad, Err(AtomError::InvalidShellConfig(_))));
    }

    #[test]
    fn explicit_config_may_exceed_shell_caps() {
        let lithium = Element::by_symbol("Li").unwrap();
        let atom =
            AtomModel::from_element_with_rng(&lithium, None, Some(&[3]), &mut seeded(12)).unwrap();
        assert_eq!(atom.electrons().len(), 3);
        assert!(atom.electrons().iter().all(|e| e.shell == 0));
    }

    #[test]
    fn decoupled_precession_keeps_construction_tilt() {
        let mut atom = AtomModel::with_rng(1, 0, 1, &mut seeded(13)).unwrap();
        atom.set_coupled_precession(false);
        let tilt_radius = atom.electrons()[0].orbit_radius;
        atom.update(4.2);
        let p = atom.electrons()[0].position;
        assert!((p.length() - tilt_radius).abs() / tilt_radius < 1e-5);
    }

    #[test]
    fn electron_orbit_radii_scale_with_nucleus() {
        let atom = AtomModel::with_rng(20, 20, 12, &mut seeded(14)).unwrap();
        for electron in atom.electrons() {
            let expected = orbit_radius(electron.shell, atom.nucleus_radius());
            assert!((electron.orbit_radius - expected).abs() < 1e-6);
        }
    }
}
