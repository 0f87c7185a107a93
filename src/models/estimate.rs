//! Values tagged with how they were obtained.

use serde::Serialize;

/// Where a computed value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Read directly from authoritative reference data.
    Exact,
    /// Interpolated from approximate page data.
    Estimated,
    /// A safe default substituted for a failed lookup or invalid input.
    Fallback,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Exact => "exact",
            Provenance::Estimated => "estimated",
            Provenance::Fallback => "fallback",
        }
    }

    /// Returns the less trustworthy of two provenances.
    pub fn weakest(self, other: Self) -> Self {
        self.max(other)
    }
}

/// A best-effort value together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Estimate<T> {
    pub value: T,
    pub provenance: Provenance,
}

impl<T> Estimate<T> {
    pub fn exact(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::Exact,
        }
    }

    pub fn estimated(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::Estimated,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::Fallback,
        }
    }

    /// Returns true if the value is a substituted default.
    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::Fallback
    }

    /// Transforms the value, keeping the provenance.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Estimate<U> {
        Estimate {
            value: f(self.value),
            provenance: self.provenance,
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
