//! State types for the rewrite TUI.
//!
//! Each region of the screen owns an explicit state struct that the
//! components render from.

mod display;
mod in_flight;
mod input_panel;
mod toast;

pub use display::{DisplayState, SUCCESS_INDICATOR_DURATION};
pub use in_flight::InFlight;
pub use input_panel::{Focus, INITIAL_PROBLEM, InputError, InputPanelState};
pub use toast::{
    COPIED_MESSAGE, TOAST_FADE_DURATION, TOAST_VISIBLE_DURATION, ToastPhase, ToastState,
};
