//! Result panel component: the displayed record and its action row.

use crate::tui::state::{DisplayState, InFlight};

use super::text_wrap::wrap_with_indent;

/// Text of the success indicator.
pub const SUCCESS_MESSAGE: &str = "Problem rewritten successfully!";

/// Label of the retry control when idle.
pub const RETRY_LABEL: &str = "[r] Try Different Theme";

/// Label of the copy control.
pub const COPY_LABEL: &str = "[y] Copy";

/// Context for rendering the result panel.
#[derive(Debug, Clone, Copy)]
pub struct ResultPanelViewContext<'a> {
    /// Display state to render.
    pub display: &'a DisplayState,
    /// Outstanding request, if any.
    pub in_flight: Option<InFlight>,
    /// Terminal width in columns.
    pub max_width: usize,
    /// Maximum number of lines (0 = unlimited).
    pub max_height: usize,
}

/// Renders the result panel.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResultPanelComponent;

impl ResultPanelComponent {
    /// Renders the panel as newline-terminated lines.
    ///
    /// The view depends only on the context, so equal display states render
    /// identically.
    #[must_use]
    pub fn view(ctx: &ResultPanelViewContext<'_>) -> String {
        let display = ctx.display;
        if !display.results_visible() {
            return String::new();
        }

        let mut lines = vec!["-".repeat(ctx.max_width.clamp(1, 80))];
        if display.success_visible() {
            lines.push(format!("* {SUCCESS_MESSAGE}"));
        }

        lines.push("Original problem:".to_owned());
        lines.extend(wrap_with_indent(display.original_problem(), "  ", ctx.max_width));
        lines.push("Rewritten problem:".to_owned());
        lines.extend(wrap_with_indent(display.rewritten_problem(), "  ", ctx.max_width));
        lines.push(format!("Theme: {}", display.theme()));

        if !display.examples().is_empty() {
            lines.push("Examples used:".to_owned());
            for (index, example) in display.examples().iter().enumerate() {
                let indent = format!("  {}. ", index.saturating_add(1));
                lines.extend(wrap_with_indent(example, &indent, ctx.max_width));
            }
        }

        if !display.notes().is_empty() {
            lines.push(display.notes().join("  "));
        }

        if display.actions_visible() {
            lines.push(Self::render_actions(ctx.in_flight));
        }

        if ctx.max_height > 0 {
            lines.truncate(ctx.max_height);
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    fn render_actions(in_flight: Option<InFlight>) -> String {
        let retry = match in_flight {
            Some(InFlight::Retry) => InFlight::Retry.label(),
            _ => RETRY_LABEL,
        };
        format!("{retry}   {COPY_LABEL}")
    }
}
