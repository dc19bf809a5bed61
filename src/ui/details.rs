// src/ui/details.rs

use gtk4::prelude::*;
use gtk4::{Align, Box, Frame, Label, Orientation};

use crate::model::Element;

/// Builds the property block shown when an element is selected.
pub fn format_details(element: &Element, mass_decimals: usize) -> String {
    format!(
        "{name} (Symbol: {symbol})\n\
         ---------------------------\n\
         Atomic Number: {z}\n\
         Atomic Mass: {mass} amu\n\
         Category: {category}\n\
         Oxidation States: {oxidation}\n\
         Electronegativity: {chi}\n\
         Density: {density}\n\
         Electron Configuration: {config}",
        name = element.name,
        symbol = element.symbol,
        z = element.atomic_number,
        mass = element.mass_label(mass_decimals),
        category = element.category,
        oxidation = element.oxidation_states,
        chi = element.electronegativity_label(),
        density = element.density_label(),
        config = element.electron_configuration,
    )
}

#[derive(Clone)]
pub struct DetailsPanel {
    pub container: Box,
    info_label: Label,
}

impl DetailsPanel {
    pub fn new() -> Self {
        let container = Box::new(Orientation::Vertical, 10);
        container.set_margin_start(10);
        container.set_margin_end(10);
        container.set_margin_bottom(10);

        let frame = Frame::new(Some("Element Details"));
        let info_box = Box::new(Orientation::Vertical, 10);
        info_box.set_margin_top(10);
        info_box.set_margin_bottom(10);
        info_box.set_margin_start(10);
        info_box.set_margin_end(10);

        let info_label = Label::new(Some("Click an element or search to see its properties."));
        info_label.set_wrap(true);
        info_label.set_xalign(0.0);
        info_label.set_halign(Align::Start);

        info_box.append(&info_label);
        frame.set_child(Some(&info_box));
        container.append(&frame);

        Self {
            container,
            info_label,
        }
    }

    pub fn update(&self, element: &Element, mass_decimals: usize) {
        self.info_label
            .set_text(&format_details(element, mass_decimals));
    }
}

impl Default for DetailsPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementCatalog;

    #[test]
    fn test_details_block_lists_every_property() {
        let catalog = ElementCatalog::new();
        let fe = catalog.get("Fe").unwrap();
        let text = format_details(fe, 2);

        assert!(text.starts_with("Iron (Symbol: Fe)"));
        assert!(text.contains("Atomic Number: 26"));
        assert!(text.contains("Atomic Mass: 55.85 amu"));
        assert!(text.contains("Category: Transition Metal"));
        assert!(text.contains("Oxidation States: +2, +3"));
        assert!(text.contains("Electronegativity: 1.83"));
        assert!(text.contains("Density: 7.874 g/cm³"));
        assert!(text.contains("Electron Configuration: [Ar] 3d⁶ 4s²"));
    }

    #[test]
    fn test_details_block_for_synthetic_element() {
        let catalog = ElementCatalog::new();
        let og = catalog.get("Og").unwrap();
        let text = format_details(og, 2);

        assert!(text.contains("Atomic Mass: [294] amu"));
        assert!(text.contains("Electronegativity: —"));
        assert!(text.contains("Density: —"));
    }
}
