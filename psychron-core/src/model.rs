//! Display model selection
//!
//! The reader supports two AC display board revisions. They differ in how
//! the captured register bytes map to digits and icons, which only matters
//! to downstream decoders; capture itself is model-independent.

use heapless::String;

/// Maximum model name length accepted over the command channel
pub const MODEL_NAME_LEN: usize = 16;

/// Model name as it crosses task boundaries
pub type ModelName = String<MODEL_NAME_LEN>;

/// AC display board revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AcModel {
    /// "V1_2" board revision
    V12,
    /// "V1_4" board revision, the fallback for unrecognized names
    #[default]
    V14,
}

impl AcModel {
    /// Select a model by name.
    ///
    /// Only the exact string "V1_2" selects [`AcModel::V12`]; every other
    /// input (including case variants and empty strings) falls back to
    /// [`AcModel::V14`]. The fallback is silent selection policy, not an
    /// input validation failure.
    pub fn from_name(name: &str) -> Self {
        match name {
            "V1_2" => AcModel::V12,
            _ => AcModel::V14,
        }
    }

    /// Canonical name string for this revision
    pub const fn name(self) -> &'static str {
        match self {
            AcModel::V12 => "V1_2",
            AcModel::V14 => "V1_4",
        }
    }

    /// Numeric model code reported back to the caller of a model change
    pub const fn code(self) -> i32 {
        match self {
            AcModel::V12 => 12,
            AcModel::V14 => 14,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_selects_v12() {
        assert_eq!(AcModel::from_name("V1_2"), AcModel::V12);
        assert_eq!(AcModel::from_name("V1_2").code(), 12);
    }

    #[test]
    fn test_v14_name_selects_v14() {
        assert_eq!(AcModel::from_name("V1_4"), AcModel::V14);
        assert_eq!(AcModel::from_name("V1_4").code(), 14);
    }

    #[test]
    fn test_unrecognized_names_fall_back_to_v14() {
        for name in ["", "garbage", "v1_2", "V1_2 ", " V1_2", "V12", "1_2"] {
            assert_eq!(AcModel::from_name(name), AcModel::V14, "input {:?}", name);
            assert_eq!(AcModel::from_name(name).code(), 14);
        }
    }

    #[test]
    fn test_default_is_v14() {
        assert_eq!(AcModel::default(), AcModel::V14);
    }

    #[test]
    fn test_canonical_names_round_trip() {
        assert_eq!(AcModel::from_name(AcModel::V12.name()), AcModel::V12);
        assert_eq!(AcModel::from_name(AcModel::V14.name()), AcModel::V14);
    }
}
