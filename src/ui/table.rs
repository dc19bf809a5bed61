// src/ui/table.rs

use gtk4::prelude::*;
use gtk4::{Align, ApplicationWindow, Button, Grid, Label};
use std::cell::RefCell;
use std::rc::Rc;

use crate::model::Element;
use crate::state::AppState;
use crate::ui::details::DetailsPanel;
use crate::ui::interactions::{dispatch, AppEvent};

const GROUP_COUNT: i32 = 18;
const PERIOD_COUNT: i32 = 7;
/// Visual gap between the main table and the lanthanide/actinide rows.
const SPACER_ROW: i32 = 8;

/// Builds the clickable periodic-table grid: group labels across the top,
/// period labels down the side, one button per catalog element at its
/// (row, col) position.
pub fn build(
    state: &Rc<RefCell<AppState>>,
    details: &DetailsPanel,
    window: &ApplicationWindow,
) -> Grid {
    let grid = Grid::builder()
        .row_spacing(4)
        .column_spacing(4)
        .margin_top(20)
        .margin_bottom(10)
        .margin_start(20)
        .margin_end(20)
        .halign(Align::Center)
        .build();

    for group in 1..=GROUP_COUNT {
        let lbl = Label::new(Some(&format!("Group {}", group)));
        lbl.add_css_class("heading");
        grid.attach(&lbl, group, 0, 1, 1);
    }
    for period in 1..=PERIOD_COUNT {
        let lbl = Label::new(Some(&format!("Period {}", period)));
        lbl.add_css_class("heading");
        grid.attach(&lbl, 0, period, 1, 1);
    }

    let spacer = Label::new(None);
    spacer.set_height_request(16);
    grid.attach(&spacer, 0, SPACER_ROW, 1, 1);

    let st = state.borrow();
    let show_tooltips = st.config.show_tooltips;
    let mass_decimals = st.config.mass_precision as usize;

    for element in st.catalog.iter() {
        let button = element_button(element, mass_decimals, show_tooltips);

        let s = state.clone();
        let d = details.clone();
        let w = window.clone();
        let symbol = element.symbol;
        button.connect_clicked(move |_| {
            dispatch(&s, &d, &w, AppEvent::ElementSelected(symbol));
        });

        grid.attach(&button, element.col as i32, element.row as i32, 1, 1);
    }
    drop(st);

    grid
}

fn element_button(element: &Element, mass_decimals: usize, show_tooltips: bool) -> Button {
    let face = format!(
        "{}\n{}\n{}",
        element.atomic_number,
        element.symbol,
        element.mass_label(mass_decimals)
    );

    let button = Button::with_label(&face);
    button.add_css_class("element");
    button.add_css_class(element.category.css_class());

    if show_tooltips {
        button.set_tooltip_text(Some(&format!(
            "{} (Atomic Number: {}, Atomic Mass: {} amu)",
            element.name,
            element.atomic_number,
            element.mass_label(mass_decimals)
        )));
    }

    button
}
