// src/model/element.rs

use std::fmt;

/// Display grouping for the table; drives the button color in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::AlkaliMetal,
        Category::AlkalineEarthMetal,
        Category::TransitionMetal,
        Category::PostTransitionMetal,
        Category::Metalloid,
        Category::Nonmetal,
        Category::Halogen,
        Category::NobleGas,
        Category::Lanthanide,
        Category::Actinide,
    ];

    /// Stable CSS class name; the theme attaches a background color to each.
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::AlkaliMetal => "cat-alkali",
            Category::AlkalineEarthMetal => "cat-alkaline-earth",
            Category::TransitionMetal => "cat-transition",
            Category::PostTransitionMetal => "cat-post-transition",
            Category::Metalloid => "cat-metalloid",
            Category::Nonmetal => "cat-nonmetal",
            Category::Halogen => "cat-halogen",
            Category::NobleGas => "cat-noble-gas",
            Category::Lanthanide => "cat-lanthanide",
            Category::Actinide => "cat-actinide",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Category::AlkaliMetal => "Alkali Metal",
            Category::AlkalineEarthMetal => "Alkaline Earth Metal",
            Category::TransitionMetal => "Transition Metal",
            Category::PostTransitionMetal => "Post-transition Metal",
            Category::Metalloid => "Metalloid",
            Category::Nonmetal => "Nonmetal",
            Category::Halogen => "Halogen",
            Category::NobleGas => "Noble Gas",
            Category::Lanthanide => "Lanthanide",
            Category::Actinide => "Actinide",
        };
        write!(f, "{}", label)
    }
}

/// One chemical element. All fields are fixed for the process lifetime;
/// the catalog hands out `&'static` references to these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Source mass string. Bracketed (e.g. "[294]") for synthetic elements
    /// with no standard atomic weight.
    pub atomic_mass: &'static str,
    pub category: Category,
    /// Pauling scale; None where not measured (noble gases, heaviest elements).
    pub electronegativity: Option<f64>,
    /// g/cm³ near STP; None where unknown.
    pub density: Option<f64>,
    pub electron_configuration: &'static str,
    /// Common oxidation states, display text (e.g. "+2, +3").
    pub oxidation_states: &'static str,
    /// Grid row: periods 1-7 in rows 1-7, lanthanides row 9, actinides row 10.
    pub row: u8,
    /// Grid column: group 1-18.
    pub col: u8,
}

impl Element {
    /// Mass rendered at fixed precision where the source string parses as a
    /// number, verbatim otherwise (bracketed synthetic masses pass through).
    pub fn mass_label(&self, decimals: usize) -> String {
        match self.atomic_mass.parse::<f64>() {
            Ok(mass) => format!("{:.*}", decimals, mass),
            Err(_) => self.atomic_mass.to_string(),
        }
    }

    pub fn electronegativity_label(&self) -> String {
        match self.electronegativity {
            Some(chi) => format!("{:.2}", chi),
            None => "—".to_string(),
        }
    }

    pub fn density_label(&self) -> String {
        match self.density {
            Some(d) => format!("{} g/cm³", d),
            None => "—".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IRON: Element = Element {
        atomic_number: 26,
        symbol: "Fe",
        name: "Iron",
        atomic_mass: "55.845",
        category: Category::TransitionMetal,
        electronegativity: Some(1.83),
        density: Some(7.874),
        electron_configuration: "[Ar] 3d⁶ 4s²",
        oxidation_states: "+2, +3",
        row: 4,
        col: 8,
    };

    #[test]
    fn test_mass_label_numeric() {
        assert_eq!(IRON.mass_label(2), "55.85");
        assert_eq!(IRON.mass_label(3), "55.845");
    }

    #[test]
    fn test_mass_label_verbatim_for_synthetic() {
        let og = Element {
            atomic_mass: "[294]",
            ..IRON
        };
        assert_eq!(og.mass_label(2), "[294]");
    }

    #[test]
    fn test_css_classes_distinct() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.css_class(), b.css_class());
            }
        }
    }

    #[test]
    fn test_missing_values_render_as_dash() {
        let unknown = Element {
            electronegativity: None,
            density: None,
            ..IRON
        };
        assert_eq!(unknown.electronegativity_label(), "—");
        assert_eq!(unknown.density_label(), "—");
    }
}
