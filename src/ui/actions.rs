//! Action enum (Intent)
//!
//! Every event-to-handler binding of the page is a variant here, so the
//! wiring is explicit instead of living in markup.

/// User operations
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // card list interactions
    ToggleChecked,   // Space: the focused card's own checkbox
    ToggleSelectAll, // a: the select-all control
    StartSearch,     // /
    StartDeleteCard, // d
    DismissBanners,  // x

    // modal / text interactions
    Cancel,      // Esc / n
    Submit,      // Enter / y
    Input(char), // search keystroke
    DeleteChar,  // Backspace
}
