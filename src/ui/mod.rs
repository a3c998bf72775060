//! UI module
//!
//! MVI (Model-View-Intent) split:
//! - Model (state.rs): the App struct and its state data
//! - View (view/): pure functions mapping State to UI
//! - Intent (actions.rs): user interaction as explicit semantic Actions

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_key_event;
pub use state::App;
pub use view::render;
