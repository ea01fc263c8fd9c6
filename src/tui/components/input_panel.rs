//! Input panel component: problem text, theme selector, and submit control.

use crate::tui::state::{Focus, InFlight, InputPanelState};

use super::text_wrap::wrap_with_indent;

/// Label of the submit control when idle.
pub const SUBMIT_LABEL: &str = "[Enter] Rewrite Problem";

/// Context for rendering the input panel.
#[derive(Debug, Clone, Copy)]
pub struct InputPanelViewContext<'a> {
    /// Input state to render.
    pub state: &'a InputPanelState,
    /// Outstanding request, if any.
    pub in_flight: Option<InFlight>,
    /// Terminal width in columns.
    pub max_width: usize,
}

/// Renders the input panel.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputPanelComponent;

impl InputPanelComponent {
    /// Renders the panel as newline-terminated lines.
    #[must_use]
    pub fn view(ctx: &InputPanelViewContext<'_>) -> String {
        let mut output = String::new();
        let editing = ctx.state.focus() == Focus::Problem;

        output.push_str(if editing {
            "Math problem (editing):\n"
        } else {
            "Math problem:\n"
        });

        let cursor = if editing { "_" } else { "" };
        let text = format!("{}{cursor}", ctx.state.problem());
        for line in wrap_with_indent(&text, "> ", ctx.max_width) {
            output.push_str(&line);
            output.push('\n');
        }

        output.push_str(&Self::render_theme_selector(ctx.state));
        output.push('\n');

        let submit = match ctx.in_flight {
            Some(InFlight::Rewrite) => InFlight::Rewrite.label(),
            _ => SUBMIT_LABEL,
        };
        output.push_str(submit);
        output.push('\n');

        output
    }

    fn render_theme_selector(state: &InputPanelState) -> String {
        let total = state.themes().len();
        match (state.selected_theme(), state.selected_index()) {
            (Some(theme), Some(index)) => {
                let position = index.saturating_add(1);
                format!("Theme: < {theme} >  ({position}/{total})")
            }
            _ => format!("Theme: < Select a theme >  (0/{total})"),
        }
    }
}
