//! The burn authorization gate.
//!
//! Burning is irreversible, so the engine refuses to enter burn mode unless
//! the caller supplies the exact confirmation phrase below. The gate is
//! deliberate friction against automated tooling destroying value by
//! accident; it is not a defense against adversaries.

use crate::error::FundingError;

/// The phrase an operator must supply verbatim to authorize a burn.
pub const BURN_CONFIRMATION_TEXT: &str = "assets will be destroyed";

/// Check the operator-supplied confirmation. Stateless and idempotent.
pub fn authorize_burn(confirmation: &str) -> Result<(), FundingError> {
    if confirmation != BURN_CONFIRMATION_TEXT {
        return Err(FundingError::ConfirmationMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_phrase_is_accepted() {
        authorize_burn(BURN_CONFIRMATION_TEXT).unwrap();
        // Idempotent: a second check behaves identically.
        authorize_burn(BURN_CONFIRMATION_TEXT).unwrap();
    }

    #[test]
    fn near_misses_are_rejected() {
        for wrong in [
            "",
            "assets will be destroyed!",
            "Assets will be destroyed",
            "assets will be destroyed ",
            "yes",
        ] {
            let err = authorize_burn(wrong).unwrap_err();
            assert!(matches!(err, FundingError::ConfirmationMismatch));
        }
    }
}
