//! Ratatui widgets for the directory browser

mod brewery_list;
mod city_list;
mod details_pane;
mod help_bar;
mod help_overlay;
mod status_bar;
mod text_field;
mod type_selector;

pub use brewery_list::BreweryList;
pub use city_list::CityList;
pub use details_pane::DetailsPane;
pub use help_bar::{HelpBar, KeyHint, hints_for};
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use text_field::TextFieldWidget;
pub use type_selector::TypeSelector;
