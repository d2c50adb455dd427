//! Ratatui-based directory browser
//!
//! # Layout
//!
//! ```text
//! ┌ Which state are you visiting? ──────────────────────┐
//! └─────────────────────────────────────────────────────┘
//! ┌ Search ──────┐┌ List of Breweries (n/m) ────────────┐
//! ┌ Type ────────┐│ > Ale House  [micro]  Austin        │
//! ┌ Cities ──────┐│                                     │
//! │ [x] Austin   │┌ Details ────────────────────────────┐
//! │ [ ] Dallas   ││ address, phone, website             │
//! └──────────────┘└─────────────────────────────────────┘
//! ┌ Status ─────────────────────────────────────────────┐
//! F1:help ESC:quit
//! ```
//!
//! The filter column and result list stay hidden until a state has been
//! submitted.

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::BrowserApp;
pub use events::{EventResult, handle_key};
pub use state::{BrowserState, Focus, ListCursor, Mode, TextField};
pub use theme::Theme;
