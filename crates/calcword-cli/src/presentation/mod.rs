//! # Presentation Layer
//!
//! This module implements the **User Interface** logic for the CLI.
//! It is designed using an adaptation of the **MVVM (Model-View-ViewModel)** pattern
//! with **Component-based UI State management** for the interactive TUI.
//!
//! ## 🏗️ Architecture & Data Flow
//!
//! ### For Console Output (Plain/JSON/SVG):
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (Controller)      (Converter)       (Data)          (Driver)  ==(Plain)=> [ View ] --> Output
//!                                                                  ==(SVG)===> [ formatters::svg ] --> Output
//! ```
//!
//! ### For Interactive TUI:
//!
//! ```text
//! [ Calculator ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer (Router) ]
//!       ^                                                        |
//!       |                                                        v
//!    Action  <--------------------------------------  [ Component ] <-- User Input
//!                                                            |
//!                                                            v
//!                                                        [ View ]
//!                                                        (Widget)
//! ```
//!
//! ---
//!
//! ## 🌟 Golden Rules
//!
//! ### 1. The JSON Test 🧪
//! **ViewModel must contain raw data, not drawings.**
//! * ❌ Bad: `struct Vm { art: " _ \n|_|" }`
//! * ✅ Good: `struct Vm { cells: Vec<CellViewModel> }` (digit, segments, dot)
//!
//! ### 2. The Density Rule 🔍
//! `ViewMode` defines **Information Density**, not Shape.
//! * **Compact:** One line of text per display.
//! * **Standard:** Segment art (default for humans).
//! * **Verbose:** Segment art plus the lit segments of every cell.
//!
//! ### 3. The Schema Stability Rule 📦
//! `--format json` ignores `ViewMode` and always dumps the complete ViewModel.
//!
//! ### 4. The TUI Component Rules 🎮
//! * **ViewModel (from Presenter):** read-only snapshot of the calculator.
//! * **UI State (in Component):** cursor and selection only.
//! * Components turn keys into `Action`s; the renderer applies domain actions to the `Calculator`.
//!
//! ---
//!
//! ## ⚖️ Decision Matrix
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a new field to the JSON output | **`view_models/`** |
//! | Derive a reading or a hint from the calculator | **`presenters/`** |
//! | Change the color of lit segments | **`views/`** |
//! | Change how a segment is drawn in ASCII or SVG | **`formatters/`** |
//! | Handle keyboard input for TUI | **`views/tui/components/`** |
//! | Apply an action to the calculator | **`renderers/tui.rs`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

// Re-exports for convenience
pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    common::{OutputFormat, ViewMode},
    CommandResultViewModel, CreateView, StatusBadge, StatusLevel, Tip,
};
