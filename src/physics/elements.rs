use serde::Serialize;

/// Basic metadata describing a chemical element, as surfaced by a periodic
/// table entry.
#[derive(Clone, Debug, Serialize)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub standard_atomic_weight: f32,
    pub default_neutrons: u8,
}

const ELEMENTS: [Element; 20] = [
    Element::new(1, "H", "Hydrogen", 1.008, 0),
    Element::new(2, "He", "Helium", 4.0026, 2),
    Element::new(3, "Li", "Lithium", 6.94, 4),
    Element::new(4, "Be", "Beryllium", 9.0122, 5),
    Element::new(5, "B", "Boron", 10.81, 6),
    Element::new(6, "C", "Carbon", 12.011, 6),
    Element::new(7, "N", "Nitrogen", 14.007, 7),
    Element::new(8, "O", "Oxygen", 15.999, 8),
    Element::new(9, "F", "Fluorine", 18.998, 10),
    Element::new(10, "Ne", "Neon", 20.180, 10),
    Element::new(11, "Na", "Sodium", 22.990, 12),
    Element::new(12, "Mg", "Magnesium", 24.305, 12),
    Element::new(13, "Al", "Aluminium", 26.982, 14),
    Element::new(14, "Si", "Silicon", 28.085, 14),
    Element::new(15, "P", "Phosphorus", 30.974, 16),
    Element::new(16, "S", "Sulfur", 32.06, 16),
    Element::new(17, "Cl", "Chlorine", 35.45, 18),
    Element::new(18, "Ar", "Argon", 39.948, 22),
    Element::new(19, "K", "Potassium", 39.098, 20),
    Element::new(20, "Ca", "Calcium", 40.078, 20),
];

impl Element {
    pub const fn new(
        atomic_number: u8,
        symbol: &'static str,
        name: &'static str,
        standard_atomic_weight: f32,
        default_neutrons: u8,
    ) -> Self {
        Self {
            atomic_number,
            symbol,
            name,
            standard_atomic_weight,
            default_neutrons,
        }
    }

    pub const fn hydrogen() -> Self {
        Self::new(1, "H", "Hydrogen", 1.008, 0)
    }

    pub fn by_atomic_number(z: u8) -> Option<Self> {
        ELEMENTS
            .iter()
            .find(|element| element.atomic_number == z)
            .cloned()
    }

    pub fn by_symbol(symbol: &str) -> Option<Self> {
        ELEMENTS
            .iter()
            .find(|element| element.symbol.eq_ignore_ascii_case(symbol))
            .cloned()
    }

    pub fn all() -> &'static [Element] {
        &ELEMENTS
    }

    pub fn default_neutron_count(&self) -> usize {
        usize::from(self.default_neutrons)
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
