use thiserror::Error;

/// Errors raised by the plan builder
///
/// Out-of-range numeric input is never an error (it is clamped). These
/// variants cover ids that do not resolve against the catalog and catalogs
/// that fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Category key is not part of the catalog
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
    /// Option id is not part of the category's catalog
    #[error("Invalid selection: '{option}' is not an option of '{category}'")]
    InvalidSelection { category: String, option: String },
    /// Base plan id is not part of the catalog
    #[error("Invalid base plan: {0}")]
    InvalidBasePlan(String),
    /// Catalog failed validation
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl PlanError {
    /// Short machine-readable name, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCategory(_) => "invalid_category",
            Self::InvalidSelection { .. } => "invalid_selection",
            Self::InvalidBasePlan(_) => "invalid_base_plan",
            Self::Catalog(_) => "catalog_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = PlanError::InvalidCategory("music".to_string());
        assert_eq!(error.to_string(), "Invalid category: music");

        let error = PlanError::InvalidSelection {
            category: "gaming".to_string(),
            option: "steam".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid selection: 'steam' is not an option of 'gaming'"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(PlanError::InvalidBasePlan("x".to_string()).kind(), "invalid_base_plan");
        assert_eq!(PlanError::Catalog("x".to_string()).kind(), "catalog_error");
    }
}
