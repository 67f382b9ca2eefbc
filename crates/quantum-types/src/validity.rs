use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One flag of the browser's `ValidityState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidityKey {
    ValueMissing,
    TypeMismatch,
    PatternMismatch,
    TooLong,
    TooShort,
    RangeUnderflow,
    RangeOverflow,
    StepMismatch,
    BadInput,
    CustomError,
    Valid,
}

/// Constraint flags in the order the browser reports them.
pub const VIOLATION_ORDER: [ValidityKey; 10] = [
    ValidityKey::ValueMissing,
    ValidityKey::TypeMismatch,
    ValidityKey::PatternMismatch,
    ValidityKey::TooLong,
    ValidityKey::TooShort,
    ValidityKey::RangeUnderflow,
    ValidityKey::RangeOverflow,
    ValidityKey::StepMismatch,
    ValidityKey::BadInput,
    ValidityKey::CustomError,
];

impl ValidityKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidityKey::ValueMissing => "valueMissing",
            ValidityKey::TypeMismatch => "typeMismatch",
            ValidityKey::PatternMismatch => "patternMismatch",
            ValidityKey::TooLong => "tooLong",
            ValidityKey::TooShort => "tooShort",
            ValidityKey::RangeUnderflow => "rangeUnderflow",
            ValidityKey::RangeOverflow => "rangeOverflow",
            ValidityKey::StepMismatch => "stepMismatch",
            ValidityKey::BadInput => "badInput",
            ValidityKey::CustomError => "customError",
            ValidityKey::Valid => "valid",
        }
    }
}

impl fmt::Display for ValidityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of an input's `ValidityState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidityFlags {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_long: bool,
    pub too_short: bool,
    pub range_underflow: bool,
    pub range_overflow: bool,
    pub step_mismatch: bool,
    pub bad_input: bool,
    pub custom_error: bool,
    pub valid: bool,
}

impl ValidityFlags {
    pub fn get(&self, key: ValidityKey) -> bool {
        match key {
            ValidityKey::ValueMissing => self.value_missing,
            ValidityKey::TypeMismatch => self.type_mismatch,
            ValidityKey::PatternMismatch => self.pattern_mismatch,
            ValidityKey::TooLong => self.too_long,
            ValidityKey::TooShort => self.too_short,
            ValidityKey::RangeUnderflow => self.range_underflow,
            ValidityKey::RangeOverflow => self.range_overflow,
            ValidityKey::StepMismatch => self.step_mismatch,
            ValidityKey::BadInput => self.bad_input,
            ValidityKey::CustomError => self.custom_error,
            ValidityKey::Valid => self.valid,
        }
    }

    /// The first violated constraint, ignoring the aggregate `valid` flag.
    pub fn first_violation(&self) -> Option<ValidityKey> {
        VIOLATION_ORDER.iter().copied().find(|key| self.get(*key))
    }
}

/// Violated constraints recorded for a form field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationSet(BTreeMap<ValidityKey, bool>);

impl ValidationSet {
    pub fn single(key: ValidityKey) -> Self {
        let mut set = BTreeMap::new();
        set.insert(key, true);
        Self(set)
    }

    /// Record the first violation in `flags`; valid input yields an empty set.
    pub fn from_flags(flags: &ValidityFlags) -> Self {
        flags.first_violation().map(Self::single).unwrap_or_default()
    }

    pub fn contains(&self, key: ValidityKey) -> bool {
        self.0.get(&key).copied().unwrap_or(false)
    }

    pub fn is_invalid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = ValidityKey> + '_ {
        self.0.iter().filter(|(_, set)| **set).map(|(key, _)| *key)
    }
}
