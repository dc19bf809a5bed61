// src/model/catalog.rs
//
// Static periodic-table data. Populated once at compile time, never mutated;
// every accessor hands out `&'static Element`.

use std::fmt;

use super::element::{Category, Element};

// --- ERROR HANDLING ---

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    NotFound(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::NotFound(query) => {
                write!(f, "No element matches \"{}\"", query)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

// --- CATALOG ---

/// Read-only view over the element table. Cheap to copy around; the data
/// itself lives in the binary.
#[derive(Debug, Clone, Copy)]
pub struct ElementCatalog {
    elements: &'static [Element],
}

impl ElementCatalog {
    pub const fn new() -> Self {
        Self { elements: &ELEMENTS }
    }

    /// Exact symbol key lookup ("Fe", not "fe"). Use `lookup` for
    /// user-typed queries.
    pub fn get(&self, symbol: &str) -> Result<&'static Element, CatalogError> {
        self.elements
            .iter()
            .find(|e| e.symbol == symbol)
            .ok_or_else(|| CatalogError::NotFound(symbol.to_string()))
    }

    /// All elements in ascending atomic number. Callers must not rely on
    /// the order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for ElementCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// --- DATA ---

#[allow(clippy::too_many_arguments)]
const fn el(
    atomic_number: u8,
    symbol: &'static str,
    name: &'static str,
    atomic_mass: &'static str,
    category: Category,
    electronegativity: Option<f64>,
    density: Option<f64>,
    electron_configuration: &'static str,
    oxidation_states: &'static str,
    row: u8,
    col: u8,
) -> Element {
    Element {
        atomic_number,
        symbol,
        name,
        atomic_mass,
        category,
        electronegativity,
        density,
        electron_configuration,
        oxidation_states,
        row,
        col,
    }
}

use Category::{
    Actinide, AlkaliMetal, AlkalineEarthMetal, Halogen, Lanthanide, Metalloid, NobleGas, Nonmetal,
    PostTransitionMetal, TransitionMetal,
};

/// All 118 elements. Rows 1-7 are the periods, row 9 the lanthanides,
/// row 10 the actinides (row 8 is the visual gap in the table grid).
/// Masses are abridged standard atomic weights; bracketed values are the
/// mass number of the longest-lived isotope. Densities in g/cm³ near STP.
static ELEMENTS: [Element; 118] = [
    el(1, "H", "Hydrogen", "1.008", Nonmetal, Some(2.20), Some(0.00008988), "1s¹", "+1, -1", 1, 1),
    el(2, "He", "Helium", "4.0026", NobleGas, None, Some(0.0001785), "1s²", "0", 1, 18),
    el(3, "Li", "Lithium", "6.94", AlkaliMetal, Some(0.98), Some(0.534), "[He] 2s¹", "+1", 2, 1),
    el(4, "Be", "Beryllium", "9.0122", AlkalineEarthMetal, Some(1.57), Some(1.85), "[He] 2s²", "+2", 2, 2),
    el(5, "B", "Boron", "10.81", Metalloid, Some(2.04), Some(2.34), "[He] 2s² 2p¹", "+3", 2, 13),
    el(6, "C", "Carbon", "12.011", Nonmetal, Some(2.55), Some(2.267), "[He] 2s² 2p²", "+4, +2, -4", 2, 14),
    el(7, "N", "Nitrogen", "14.007", Nonmetal, Some(3.04), Some(0.0012506), "[He] 2s² 2p³", "-3, +3, +5", 2, 15),
    el(8, "O", "Oxygen", "15.999", Nonmetal, Some(3.44), Some(0.001429), "[He] 2s² 2p⁴", "-2", 2, 16),
    el(9, "F", "Fluorine", "18.998", Halogen, Some(3.98), Some(0.001696), "[He] 2s² 2p⁵", "-1", 2, 17),
    el(10, "Ne", "Neon", "20.180", NobleGas, None, Some(0.0008999), "[He] 2s² 2p⁶", "0", 2, 18),
    el(11, "Na", "Sodium", "22.990", AlkaliMetal, Some(0.93), Some(0.971), "[Ne] 3s¹", "+1", 3, 1),
    el(12, "Mg", "Magnesium", "24.305", AlkalineEarthMetal, Some(1.31), Some(1.738), "[Ne] 3s²", "+2", 3, 2),
    el(13, "Al", "Aluminium", "26.982", PostTransitionMetal, Some(1.61), Some(2.698), "[Ne] 3s² 3p¹", "+3", 3, 13),
    el(14, "Si", "Silicon", "28.085", Metalloid, Some(1.90), Some(2.3296), "[Ne] 3s² 3p²", "+4, -4", 3, 14),
    el(15, "P", "Phosphorus", "30.974", Nonmetal, Some(2.19), Some(1.82), "[Ne] 3s² 3p³", "-3, +3, +5", 3, 15),
    el(16, "S", "Sulfur", "32.06", Nonmetal, Some(2.58), Some(2.067), "[Ne] 3s² 3p⁴", "-2, +4, +6", 3, 16),
    el(17, "Cl", "Chlorine", "35.45", Halogen, Some(3.16), Some(0.003214), "[Ne] 3s² 3p⁵", "-1, +1, +5, +7", 3, 17),
    el(18, "Ar", "Argon", "39.948", NobleGas, None, Some(0.0017837), "[Ne] 3s² 3p⁶", "0", 3, 18),
    el(19, "K", "Potassium", "39.098", AlkaliMetal, Some(0.82), Some(0.862), "[Ar] 4s¹", "+1", 4, 1),
    el(20, "Ca", "Calcium", "40.078", AlkalineEarthMetal, Some(1.00), Some(1.54), "[Ar] 4s²", "+2", 4, 2),
    el(21, "Sc", "Scandium", "44.956", TransitionMetal, Some(1.36), Some(2.989), "[Ar] 3d¹ 4s²", "+3", 4, 3),
    el(22, "Ti", "Titanium", "47.867", TransitionMetal, Some(1.54), Some(4.54), "[Ar] 3d² 4s²", "+4, +3", 4, 4),
    el(23, "V", "Vanadium", "50.942", TransitionMetal, Some(1.63), Some(6.11), "[Ar] 3d³ 4s²", "+5, +4, +3, +2", 4, 5),
    el(24, "Cr", "Chromium", "51.996", TransitionMetal, Some(1.66), Some(7.15), "[Ar] 3d⁵ 4s¹", "+3, +6, +2", 4, 6),
    el(25, "Mn", "Manganese", "54.938", TransitionMetal, Some(1.55), Some(7.44), "[Ar] 3d⁵ 4s²", "+2, +4, +7", 4, 7),
    el(26, "Fe", "Iron", "55.845", TransitionMetal, Some(1.83), Some(7.874), "[Ar] 3d⁶ 4s²", "+2, +3", 4, 8),
    el(27, "Co", "Cobalt", "58.933", TransitionMetal, Some(1.88), Some(8.86), "[Ar] 3d⁷ 4s²", "+2, +3", 4, 9),
    el(28, "Ni", "Nickel", "58.693", TransitionMetal, Some(1.91), Some(8.912), "[Ar] 3d⁸ 4s²", "+2, +3", 4, 10),
    el(29, "Cu", "Copper", "63.546", TransitionMetal, Some(1.90), Some(8.96), "[Ar] 3d¹⁰ 4s¹", "+2, +1", 4, 11),
    el(30, "Zn", "Zinc", "65.38", TransitionMetal, Some(1.65), Some(7.134), "[Ar] 3d¹⁰ 4s²", "+2", 4, 12),
    el(31, "Ga", "Gallium", "69.723", PostTransitionMetal, Some(1.81), Some(5.907), "[Ar] 3d¹⁰ 4s² 4p¹", "+3", 4, 13),
    el(32, "Ge", "Germanium", "72.630", Metalloid, Some(2.01), Some(5.323), "[Ar] 3d¹⁰ 4s² 4p²", "+4, +2", 4, 14),
    el(33, "As", "Arsenic", "74.922", Metalloid, Some(2.18), Some(5.776), "[Ar] 3d¹⁰ 4s² 4p³", "-3, +3, +5", 4, 15),
    el(34, "Se", "Selenium", "78.971", Nonmetal, Some(2.55), Some(4.809), "[Ar] 3d¹⁰ 4s² 4p⁴", "-2, +4, +6", 4, 16),
    el(35, "Br", "Bromine", "79.904", Halogen, Some(2.96), Some(3.122), "[Ar] 3d¹⁰ 4s² 4p⁵", "-1, +1, +5", 4, 17),
    el(36, "Kr", "Krypton", "83.798", NobleGas, Some(3.00), Some(0.003733), "[Ar] 3d¹⁰ 4s² 4p⁶", "0, +2", 4, 18),
    el(37, "Rb", "Rubidium", "85.468", AlkaliMetal, Some(0.82), Some(1.532), "[Kr] 5s¹", "+1", 5, 1),
    el(38, "Sr", "Strontium", "87.62", AlkalineEarthMetal, Some(0.95), Some(2.64), "[Kr] 5s²", "+2", 5, 2),
    el(39, "Y", "Yttrium", "88.906", TransitionMetal, Some(1.22), Some(4.469), "[Kr] 4d¹ 5s²", "+3", 5, 3),
    el(40, "Zr", "Zirconium", "91.224", TransitionMetal, Some(1.33), Some(6.506), "[Kr] 4d² 5s²", "+4", 5, 4),
    el(41, "Nb", "Niobium", "92.906", TransitionMetal, Some(1.60), Some(8.57), "[Kr] 4d⁴ 5s¹", "+5, +3", 5, 5),
    el(42, "Mo", "Molybdenum", "95.95", TransitionMetal, Some(2.16), Some(10.22), "[Kr] 4d⁵ 5s¹", "+6, +4", 5, 6),
    el(43, "Tc", "Technetium", "[98]", TransitionMetal, Some(1.90), Some(11.5), "[Kr] 4d⁵ 5s²", "+7, +4", 5, 7),
    el(44, "Ru", "Ruthenium", "101.07", TransitionMetal, Some(2.20), Some(12.37), "[Kr] 4d⁷ 5s¹", "+3, +4", 5, 8),
    el(45, "Rh", "Rhodium", "102.91", TransitionMetal, Some(2.28), Some(12.41), "[Kr] 4d⁸ 5s¹", "+3", 5, 9),
    el(46, "Pd", "Palladium", "106.42", TransitionMetal, Some(2.20), Some(12.02), "[Kr] 4d¹⁰", "+2, +4", 5, 10),
    el(47, "Ag", "Silver", "107.87", TransitionMetal, Some(1.93), Some(10.501), "[Kr] 4d¹⁰ 5s¹", "+1", 5, 11),
    el(48, "Cd", "Cadmium", "112.41", TransitionMetal, Some(1.69), Some(8.69), "[Kr] 4d¹⁰ 5s²", "+2", 5, 12),
    el(49, "In", "Indium", "114.82", PostTransitionMetal, Some(1.78), Some(7.31), "[Kr] 4d¹⁰ 5s² 5p¹", "+3", 5, 13),
    el(50, "Sn", "Tin", "118.71", PostTransitionMetal, Some(1.96), Some(7.287), "[Kr] 4d¹⁰ 5s² 5p²", "+4, +2", 5, 14),
    el(51, "Sb", "Antimony", "121.76", Metalloid, Some(2.05), Some(6.685), "[Kr] 4d¹⁰ 5s² 5p³", "-3, +3, +5", 5, 15),
    el(52, "Te", "Tellurium", "127.60", Metalloid, Some(2.10), Some(6.232), "[Kr] 4d¹⁰ 5s² 5p⁴", "-2, +4, +6", 5, 16),
    el(53, "I", "Iodine", "126.90", Halogen, Some(2.66), Some(4.93), "[Kr] 4d¹⁰ 5s² 5p⁵", "-1, +1, +5, +7", 5, 17),
    el(54, "Xe", "Xenon", "131.29", NobleGas, Some(2.60), Some(0.005887), "[Kr] 4d¹⁰ 5s² 5p⁶", "0, +2, +4, +6", 5, 18),
    el(55, "Cs", "Caesium", "132.91", AlkaliMetal, Some(0.79), Some(1.873), "[Xe] 6s¹", "+1", 6, 1),
    el(56, "Ba", "Barium", "137.33", AlkalineEarthMetal, Some(0.89), Some(3.594), "[Xe] 6s²", "+2", 6, 2),
    el(57, "La", "Lanthanum", "138.91", Lanthanide, Some(1.10), Some(6.145), "[Xe] 5d¹ 6s²", "+3", 9, 3),
    el(58, "Ce", "Cerium", "140.12", Lanthanide, Some(1.12), Some(6.770), "[Xe] 4f¹ 5d¹ 6s²", "+3, +4", 9, 4),
    el(59, "Pr", "Praseodymium", "140.91", Lanthanide, Some(1.13), Some(6.773), "[Xe] 4f³ 6s²", "+3", 9, 5),
    el(60, "Nd", "Neodymium", "144.24", Lanthanide, Some(1.14), Some(7.007), "[Xe] 4f⁴ 6s²", "+3", 9, 6),
    el(61, "Pm", "Promethium", "[145]", Lanthanide, Some(1.13), Some(7.26), "[Xe] 4f⁵ 6s²", "+3", 9, 7),
    el(62, "Sm", "Samarium", "150.36", Lanthanide, Some(1.17), Some(7.52), "[Xe] 4f⁶ 6s²", "+3, +2", 9, 8),
    el(63, "Eu", "Europium", "151.96", Lanthanide, Some(1.20), Some(5.243), "[Xe] 4f⁷ 6s²", "+3, +2", 9, 9),
    el(64, "Gd", "Gadolinium", "157.25", Lanthanide, Some(1.20), Some(7.895), "[Xe] 4f⁷ 5d¹ 6s²", "+3", 9, 10),
    el(65, "Tb", "Terbium", "158.93", Lanthanide, Some(1.20), Some(8.229), "[Xe] 4f⁹ 6s²", "+3", 9, 11),
    el(66, "Dy", "Dysprosium", "162.50", Lanthanide, Some(1.22), Some(8.55), "[Xe] 4f¹⁰ 6s²", "+3", 9, 12),
    el(67, "Ho", "Holmium", "164.93", Lanthanide, Some(1.23), Some(8.795), "[Xe] 4f¹¹ 6s²", "+3", 9, 13),
    el(68, "Er", "Erbium", "167.26", Lanthanide, Some(1.24), Some(9.066), "[Xe] 4f¹² 6s²", "+3", 9, 14),
    el(69, "Tm", "Thulium", "168.93", Lanthanide, Some(1.25), Some(9.321), "[Xe] 4f¹³ 6s²", "+3, +2", 9, 15),
    el(70, "Yb", "Ytterbium", "173.05", Lanthanide, Some(1.10), Some(6.965), "[Xe] 4f¹⁴ 6s²", "+3, +2", 9, 16),
    el(71, "Lu", "Lutetium", "174.97", Lanthanide, Some(1.27), Some(9.84), "[Xe] 4f¹⁴ 5d¹ 6s²", "+3", 9, 17),
    el(72, "Hf", "Hafnium", "178.49", TransitionMetal, Some(1.30), Some(13.31), "[Xe] 4f¹⁴ 5d² 6s²", "+4", 6, 4),
    el(73, "Ta", "Tantalum", "180.95", TransitionMetal, Some(1.50), Some(16.654), "[Xe] 4f¹⁴ 5d³ 6s²", "+5", 6, 5),
    el(74, "W", "Tungsten", "183.84", TransitionMetal, Some(2.36), Some(19.25), "[Xe] 4f¹⁴ 5d⁴ 6s²", "+6, +4", 6, 6),
    el(75, "Re", "Rhenium", "186.21", TransitionMetal, Some(1.90), Some(21.02), "[Xe] 4f¹⁴ 5d⁵ 6s²", "+7, +4", 6, 7),
    el(76, "Os", "Osmium", "190.23", TransitionMetal, Some(2.20), Some(22.59), "[Xe] 4f¹⁴ 5d⁶ 6s²", "+4, +8", 6, 8),
    el(77, "Ir", "Iridium", "192.22", TransitionMetal, Some(2.20), Some(22.56), "[Xe] 4f¹⁴ 5d⁷ 6s²", "+3, +4", 6, 9),
    el(78, "Pt", "Platinum", "195.08", TransitionMetal, Some(2.28), Some(21.46), "[Xe] 4f¹⁴ 5d⁹ 6s¹", "+2, +4", 6, 10),
    el(79, "Au", "Gold", "196.97", TransitionMetal, Some(2.54), Some(19.282), "[Xe] 4f¹⁴ 5d¹⁰ 6s¹", "+3, +1", 6, 11),
    el(80, "Hg", "Mercury", "200.59", TransitionMetal, Some(2.00), Some(13.5336), "[Xe] 4f¹⁴ 5d¹⁰ 6s²", "+2, +1", 6, 12),
    el(81, "Tl", "Thallium", "204.38", PostTransitionMetal, Some(1.62), Some(11.85), "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p¹", "+1, +3", 6, 13),
    el(82, "Pb", "Lead", "207.2", PostTransitionMetal, Some(2.33), Some(11.342), "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p²", "+2, +4", 6, 14),
    el(83, "Bi", "Bismuth", "208.98", PostTransitionMetal, Some(2.02), Some(9.807), "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p³", "+3, +5", 6, 15),
    el(84, "Po", "Polonium", "[209]", PostTransitionMetal, Some(2.00), Some(9.32), "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p⁴", "+4, +2, -2", 6, 16),
    el(85, "At", "Astatine", "[210]", Halogen, Some(2.20), None, "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p⁵", "-1, +1", 6, 17),
    el(86, "Rn", "Radon", "[222]", NobleGas, None, Some(0.00973), "[Xe] 4f¹⁴ 5d¹⁰ 6s² 6p⁶", "0, +2", 6, 18),
    el(87, "Fr", "Francium", "[223]", AlkaliMetal, Some(0.70), None, "[Rn] 7s¹", "+1", 7, 1),
    el(88, "Ra", "Radium", "[226]", AlkalineEarthMetal, Some(0.90), Some(5.5), "[Rn] 7s²", "+2", 7, 2),
    el(89, "Ac", "Actinium", "[227]", Actinide, Some(1.10), Some(10.07), "[Rn] 6d¹ 7s²", "+3", 10, 3),
    el(90, "Th", "Thorium", "232.04", Actinide, Some(1.30), Some(11.72), "[Rn] 6d² 7s²", "+4", 10, 4),
    el(91, "Pa", "Protactinium", "231.04", Actinide, Some(1.50), Some(15.37), "[Rn] 5f² 6d¹ 7s²", "+5, +4", 10, 5),
    el(92, "U", "Uranium", "238.03", Actinide, Some(1.38), Some(18.95), "[Rn] 5f³ 6d¹ 7s²", "+6, +4", 10, 6),
    el(93, "Np", "Neptunium", "[237]", Actinide, Some(1.36), Some(20.45), "[Rn] 5f⁴ 6d¹ 7s²", "+5", 10, 7),
    el(94, "Pu", "Plutonium", "[244]", Actinide, Some(1.28), Some(19.84), "[Rn] 5f⁶ 7s²", "+4, +6", 10, 8),
    el(95, "Am", "Americium", "[243]", Actinide, Some(1.30), Some(13.69), "[Rn] 5f⁷ 7s²", "+3", 10, 9),
    el(96, "Cm", "Curium", "[247]", Actinide, Some(1.30), Some(13.51), "[Rn] 5f⁷ 6d¹ 7s²", "+3", 10, 10),
    el(97, "Bk", "Berkelium", "[247]", Actinide, Some(1.30), Some(14.79), "[Rn] 5f⁹ 7s²", "+3, +4", 10, 11),
    el(98, "Cf", "Californium", "[251]", Actinide, Some(1.30), Some(15.1), "[Rn] 5f¹⁰ 7s²", "+3", 10, 12),
    el(99, "Es", "Einsteinium", "[252]", Actinide, Some(1.30), Some(8.84), "[Rn] 5f¹¹ 7s²", "+3", 10, 13),
    el(100, "Fm", "Fermium", "[257]", Actinide, Some(1.30), None, "[Rn] 5f¹² 7s²", "+3", 10, 14),
    el(101, "Md", "Mendelevium", "[258]", Actinide, Some(1.30), None, "[Rn] 5f¹³ 7s²", "+3, +2", 10, 15),
    el(102, "No", "Nobelium", "[259]", Actinide, Some(1.30), None, "[Rn] 5f¹⁴ 7s²", "+2, +3", 10, 16),
    el(103, "Lr", "Lawrencium", "[266]", Actinide, None, None, "[Rn] 5f¹⁴ 7s² 7p¹", "+3", 10, 17),
    el(104, "Rf", "Rutherfordium", "[267]", TransitionMetal, None, None, "[Rn] 5f¹⁴ 6d² 7s²", "+4", 7, 4),
    el(105, "Db", "Dubnium", "[268]", TransitionMetal, None, None, "[Rn] 5f¹⁴ 6d³ 7s²", "+5", 7, 5),
    el(106, "Sg", "Seaborgium", "[269]", TransitionMetal, None, None, "[Rn] 5f¹⁴ 6d⁴ 7s²", "+6", 7, 6),
    el(107, "Bh", "Bohrium", "[270]", TransitionMetal, None, None, "[Rn] 5f¹⁴ 6d⁵ 7s²", "+7", 7, 7),
    el(108, "Hs", "Hassium", "[277]", TransitionMetal, None, None, "[Rn] 5f¹⁴ 6d⁶ 7s²", "+8", 7, 8),
    el(109, "Mt", "Meitnerium", "[278]", TransitionMetal, None, None, "[Rn] 5f¹⁴ 6d⁷ 7s²", "—", 7, 9),
    el(110, "Ds", "Darmstadtium", "[281]", TransitionMetal, None, None, "[Rn] 5f¹⁴ 6d⁹ 7s¹", "—", 7, 10),
    el(111, "Rg", "Roentgenium", "[282]", TransitionMetal, None, None, "[Rn] 5f¹⁴ 6d¹⁰ 7s¹", "—", 7, 11),
    el(112, "Cn", "Copernicium", "[285]", TransitionMetal, None, None, "[Rn] 5f¹⁴ 6d¹⁰ 7s²", "+2", 7, 12),
    el(113, "Nh", "Nihonium", "[286]", PostTransitionMetal, None, None, "[Rn] 5f¹⁴ 6d¹⁰ 7s² 7p¹", "—", 7, 13),
    el(114, "Fl", "Flerovium", "[289]", PostTransitionMetal, None, None, "[Rn] 5f¹⁴ 6d¹⁰ 7s² 7p²", "—", 7, 14),
    el(115, "Mc", "Moscovium", "[290]", PostTransitionMetal, None, None, "[Rn] 5f¹⁴ 6d¹⁰ 7s² 7p³", "—", 7, 15),
    el(116, "Lv", "Livermorium", "[293]", PostTransitionMetal, None, None, "[Rn] 5f¹⁴ 6d¹⁰ 7s² 7p⁴", "—", 7, 16),
    el(117, "Ts", "Tennessine", "[294]", Halogen, None, None, "[Rn] 5f¹⁴ 6d¹⁰ 7s² 7p⁵", "—", 7, 17),
    el(118, "Og", "Oganesson", "[294]", NobleGas, None, None, "[Rn] 5f¹⁴ 6d¹⁰ 7s² 7p⁶", "—", 7, 18),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_all_118_elements() {
        let catalog = ElementCatalog::new();
        assert_eq!(catalog.len(), 118);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_atomic_numbers_cover_1_to_118() {
        let catalog = ElementCatalog::new();
        let numbers: HashSet<u8> = catalog.iter().map(|e| e.atomic_number).collect();
        assert_eq!(numbers.len(), 118);
        for z in 1..=118u8 {
            assert!(numbers.contains(&z), "missing atomic number {}", z);
        }
    }

    #[test]
    fn test_symbols_unique_and_non_empty() {
        let catalog = ElementCatalog::new();
        let mut seen = HashSet::new();
        for e in catalog.iter() {
            assert!(!e.symbol.is_empty());
            assert!(e.symbol.len() <= 3);
            assert!(seen.insert(e.symbol), "duplicate symbol {}", e.symbol);
        }
    }

    #[test]
    fn test_names_unique() {
        let catalog = ElementCatalog::new();
        let mut seen = HashSet::new();
        for e in catalog.iter() {
            assert!(seen.insert(e.name), "duplicate name {}", e.name);
        }
    }

    #[test]
    fn test_grid_positions_do_not_collide() {
        let catalog = ElementCatalog::new();
        let mut seen = HashSet::new();
        for e in catalog.iter() {
            assert!(
                seen.insert((e.row, e.col)),
                "{} collides at ({}, {})",
                e.symbol,
                e.row,
                e.col
            );
            assert!((1..=10).contains(&e.row), "{} row out of range", e.symbol);
            assert!((1..=18).contains(&e.col), "{} col out of range", e.symbol);
        }
    }

    #[test]
    fn test_f_block_sits_below_the_main_table() {
        let catalog = ElementCatalog::new();
        for e in catalog.iter() {
            match e.category {
                Category::Lanthanide => assert_eq!(e.row, 9, "{}", e.symbol),
                Category::Actinide => assert_eq!(e.row, 10, "{}", e.symbol),
                _ => assert!(e.row <= 7, "{}", e.symbol),
            }
        }
    }

    #[test]
    fn test_get_by_exact_symbol() {
        let catalog = ElementCatalog::new();
        let fe = catalog.get("Fe").unwrap();
        assert_eq!(fe.atomic_number, 26);
        assert_eq!(fe.name, "Iron");
    }

    #[test]
    fn test_get_unknown_symbol_is_not_found() {
        let catalog = ElementCatalog::new();
        let err = catalog.get("Xx").unwrap_err();
        assert_eq!(err, CatalogError::NotFound("Xx".to_string()));
        assert!(err.to_string().contains("Xx"));
    }

    #[test]
    fn test_synthetic_masses_are_bracketed() {
        let catalog = ElementCatalog::new();
        let tc = catalog.get("Tc").unwrap();
        assert_eq!(tc.atomic_mass, "[98]");
        assert_eq!(tc.mass_label(2), "[98]");
    }
}
