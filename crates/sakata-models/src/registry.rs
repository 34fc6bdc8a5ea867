//! Model lookup by name for CLI selection.

use sakata_traits::ValuationModel;
use thiserror::Error;

use crate::graham::GrahamModel;
use crate::growth_yield::GrowthYieldModel;

/// Errors raised when resolving a model name.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The requested model name is not registered.
    #[error("unknown model: '{0}' (available: growth_yield, graham)")]
    UnknownModel(String),
}

/// Create a valuation model by name, with default configuration.
///
/// Accepted names and aliases:
///
/// - `growth_yield`, `growth`, `gy` — [`GrowthYieldModel`]
/// - `graham`, `graham_number` — [`GrahamModel`]
///
/// # Errors
///
/// Returns [`ModelError::UnknownModel`] for anything else.
pub fn create_model(name: &str) -> Result<Box<dyn ValuationModel>, ModelError> {
    match name {
        "growth_yield" | "growth" | "gy" => Ok(Box::new(GrowthYieldModel::default())),
        "graham" | "graham_number" => Ok(Box::new(GrahamModel::default())),
        other => Err(ModelError::UnknownModel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_by_name_and_alias() {
        assert_eq!(create_model("growth_yield").unwrap().name(), "growth_yield");
        assert_eq!(create_model("growth").unwrap().name(), "growth_yield");
        assert_eq!(create_model("graham").unwrap().name(), "graham");
        assert_eq!(create_model("graham_number").unwrap().name(), "graham");
    }

    #[test]
    fn test_unknown_model() {
        let err = create_model("dcf").expect_err("not registered");
        assert!(matches!(err, ModelError::UnknownModel(_)));
        assert!(err.to_string().contains("dcf"));
    }
}
