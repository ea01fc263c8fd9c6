//! Retry with a different theme.

use bubbletea_rs::Cmd;

use super::RewriteApp;
use crate::rewrite::{RewriteRequest, select_retry_theme};
use crate::tui::state::InFlight;

/// Status notice when retry has no alternative theme.
pub(crate) const NO_OTHER_THEMES_NOTICE: &str = "No other themes available.";

/// Status notice when retry is pressed before anything was rewritten.
pub(crate) const NOTHING_TO_RETRY_NOTICE: &str = "Rewrite a problem first.";

impl RewriteApp {
    /// Rewrites the displayed problem in a theme chosen by the retry policy.
    ///
    /// Ignored while another request is in flight. When the provider offers
    /// no other theme, the result panel shows a placeholder instead.
    pub(super) fn handle_retry(&mut self) -> Option<Cmd> {
        if self.in_flight.is_some() {
            return None;
        }
        if !self.display.actions_visible() {
            self.set_notice(NOTHING_TO_RETRY_NOTICE);
            return None;
        }

        let original = self.display.original_problem().trim().to_owned();
        let current = self.display.theme().to_owned();
        let candidates = self.provider.candidate_themes(&original);

        let Some(theme) =
            select_retry_theme(self.retry_policy, &candidates, &current, &mut self.rng)
        else {
            self.display.show_no_other_themes();
            self.set_notice(NO_OTHER_THEMES_NOTICE);
            return None;
        };

        tracing::debug!(
            policy = %self.retry_policy,
            from = current.as_str(),
            to = theme.as_str(),
            "retrying with a different theme"
        );
        let request = RewriteRequest::new(original, theme).with_num_examples(self.num_examples);
        Some(self.start_request(request, InFlight::Retry))
    }
}
