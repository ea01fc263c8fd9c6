//! UI components for the rewrite TUI.
//!
//! Components are stateless renderers: each takes a view context built from
//! the app's state structs and returns text.

mod input_panel;
mod result_panel;
mod text_wrap;

pub use input_panel::{InputPanelComponent, InputPanelViewContext, SUBMIT_LABEL};
pub use result_panel::{
    COPY_LABEL, RETRY_LABEL, ResultPanelComponent, ResultPanelViewContext, SUCCESS_MESSAGE,
};
pub use text_wrap::wrap_with_indent;
