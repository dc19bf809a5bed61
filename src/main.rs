use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Orientation};
use gtk4::Box as GtkBox;
use std::cell::RefCell;
use std::rc::Rc;

pub mod config;
pub mod model;
pub mod state;
pub mod ui;
pub mod utils;

use state::AppState;
use ui::interactions::{dispatch, AppEvent};

fn main() {
    if let Err(e) = utils::logger::init() {
        eprintln!("Logger init failed: {}", e);
    }

    let app = Application::builder()
        .application_id("org.mavensgroup.ptable")
        .build();

    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &Application) {
    let mut initial_state = AppState::new();
    initial_state.load_config();
    let state = Rc::new(RefCell::new(initial_state));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("Modern Periodic Table")
        .default_width(1600)
        .default_height(900)
        .build();

    ui::theme::apply();

    // Table on top, search bar under it, details panel at the bottom
    let root_vbox = GtkBox::new(Orientation::Vertical, 10);
    window.set_child(Some(&root_vbox));

    let details = ui::DetailsPanel::new();

    let table = ui::table::build(&state, &details, &window);
    root_vbox.append(&table);

    let search = ui::SearchBar::new();
    {
        let s = state.clone();
        let d = details.clone();
        let w = window.clone();
        search.connect_submit(move |query| {
            dispatch(&s, &d, &w, AppEvent::SearchSubmitted(query));
        });
    }
    root_vbox.append(&search.container);

    root_vbox.append(&details.container);

    // Persist config on exit so a settings file exists after the first run
    let s = state.clone();
    window.connect_close_request(move |_| {
        log::info!("{}", s.borrow().config.save());
        glib::Propagation::Proceed
    });

    window.present();
}
