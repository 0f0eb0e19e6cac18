//! Builder session: selection state plus view state
//!
//! Every user input becomes an [`Action`]. [`Session::apply`] runs it
//! against the selection (or the view state), then recomputes the total from
//! scratch. Showing base-plan details when a plan is picked is a view-state
//! transition here and never touches the pricing engine.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::PlanError;
use crate::pricing::{self, Quote};
use crate::selection::{Configuration, Selection};

/// A single user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectBase(String),
    SetExtraData(u32),
    SetSpendCap(u32),
    SetEnabled { category: String, enabled: bool },
    SelectOption { category: String, option: String },
    ShowBaseDetails(bool),
    ToggleBaseDetails,
    Confirm,
}

/// View-only state, excluded from pricing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub show_base_details: bool,
    pub confirmation: Option<Confirmation>,
}

/// Snapshot taken when the user confirms the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub total: u64,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Session {
    selection: Selection,
    view: ViewState,
    total: u64,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let selection = Selection::new(catalog);
        let total = pricing::compute_total(selection.catalog(), selection.config());
        Self {
            selection,
            view: ViewState::default(),
            total,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.selection.catalog()
    }

    pub fn config(&self) -> &Configuration {
        self.selection.config()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn quote(&self) -> Quote {
        pricing::quote(self.catalog(), self.config())
    }

    /// Apply one action and return the recomputed total
    ///
    /// On error the selection is unchanged and the total stays as it was.
    pub fn apply(&mut self, action: Action) -> Result<u64, PlanError> {
        match action {
            Action::SelectBase(id) => {
                self.selection.set_base(&id)?;
                self.view.show_base_details = true;
                self.view.confirmation = None;
            }
            Action::SetExtraData(gb) => {
                self.selection.set_extra_data(gb);
                self.view.confirmation = None;
            }
            Action::SetSpendCap(value) => {
                self.selection.set_spend_cap(value);
                self.view.confirmation = None;
            }
            Action::SetEnabled { category, enabled } => {
                self.selection.set_bundle_enabled(&category, enabled)?;
                self.view.confirmation = None;
            }
            Action::SelectOption { category, option } => {
                self.selection.set_bundle_option(&category, &option)?;
                self.view.confirmation = None;
            }
            Action::ShowBaseDetails(show) => self.view.show_base_details = show,
            Action::ToggleBaseDetails => {
                self.view.show_base_details = !self.view.show_base_details
            }
            Action::Confirm => {
                let confirmation = Confirmation {
                    total: self.total,
                    at: Utc::now(),
                };
                info!(total = confirmation.total, base = %self.config().base, "Plan confirmed");
                self.view.confirmation = Some(confirmation);
            }
        }

        self.total = pricing::compute_total(self.catalog(), self.config());
        Ok(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn test_initial_state() {
        let s = session();
        assert_eq!(s.total(), 945);
        assert!(!s.view().show_base_details);
        assert!(s.view().confirmation.is_none());
    }

    #[test]
    fn test_select_base_forces_details() {
        let mut s = session();
        let total = s.apply(Action::SelectBase("max".to_string())).unwrap();

        assert_eq!(total, 1045);
        assert!(s.view().show_base_details);

        s.apply(Action::ShowBaseDetails(false)).unwrap();
        assert!(!s.view().show_base_details);

        // Re-selecting the same plan still expands the details
        s.apply(Action::SelectBase("max".to_string())).unwrap();
        assert!(s.view().show_base_details);
    }

    #[test]
    fn test_toggle_details_does_not_change_total() {
        let mut s = session();
        let total = s.apply(Action::ToggleBaseDetails).unwrap();
        assert_eq!(total, 945);
        assert!(s.view().show_base_details);
    }

    #[test]
    fn test_failed_action_keeps_total() {
        let mut s = session();
        let result = s.apply(Action::SelectOption {
            category: "gaming".to_string(),
            option: "steam".to_string(),
        });

        assert!(result.is_err());
        assert_eq!(s.total(), 945);
        assert_eq!(s.config().axis("gaming").unwrap().selected, "xbox");
    }

    #[test]
    fn test_confirm_then_change_clears_confirmation() {
        let mut s = session();
        s.apply(Action::Confirm).unwrap();
        assert_eq!(s.view().confirmation.as_ref().unwrap().total, 945);

        s.apply(Action::SetEnabled {
            category: "ott".to_string(),
            enabled: false,
        })
        .unwrap();
        assert!(s.view().confirmation.is_none());
        assert_eq!(s.total(), 746);
    }
}
