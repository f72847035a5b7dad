//! Typed identifier definitions for all print API resources.
//!
//! Each identifier type has a unique 3-letter prefix that identifies the
//! resource type. The suffix is 16 lowercase hex digits assigned by the
//! server.

use crate::define_id;
use crate::IdError;

/// Every prefix the API is known to issue identifiers under.
///
/// A prefix outside this set is rejected as unknown before any per-type
/// prefix comparison happens.
pub const KNOWN_PREFIXES: &[&str] = &["adr", "job", "obj", "psc", "chk", "bnk", "amc"];

// =============================================================================
// Mail Pieces
// =============================================================================

define_id!(JobId, "job");
define_id!(PostcardId, "psc");
define_id!(CheckId, "chk");
define_id!(AreaMailId, "amc");

// =============================================================================
// Supporting Resources
// =============================================================================

define_id!(AddressId, "adr");
define_id!(ObjectId, "obj");
define_id!(BankAccountId, "bnk");

// =============================================================================
// Catalog Identifiers
// =============================================================================

/// Mail setting identifier. Settings are a fixed server-side catalog keyed
/// by small integers, not prefixed hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SettingId(i64);

impl SettingId {
    pub const BLACK_AND_WHITE_DOCUMENT: Self = Self(100);
    pub const COLOR_DOCUMENT: Self = Self(101);

    /// Creates a SettingId from a raw catalog number.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying catalog number.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for SettingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SettingId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl serde::Serialize for SettingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SettingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        Ok(Self(id))
    }
}

/// Delivery service identifier, numeric like settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceId(i64);

impl ServiceId {
    /// Creates a ServiceId from a raw catalog number.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying catalog number.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ServiceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl serde::Serialize for ServiceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ServiceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        Ok(Self(id))
    }
}

/// Packaging identifier, numeric like settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackagingId(i64);

impl PackagingId {
    /// Creates a PackagingId from a raw catalog number.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying catalog number.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PackagingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PackagingId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl serde::Serialize for PackagingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PackagingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        Ok(Self(id))
    }
}

// =============================================================================
// Zip Code Routes
// =============================================================================

/// A carrier route within a zip code, written `{zip}-{route}`
/// (e.g. `94158-C001`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZipCodeRouteId {
    zip: String,
    route: String,
}

impl ZipCodeRouteId {
    /// Parses a route identifier from a `{zip}-{route}` string.
    ///
    /// The zip segment must be exactly 5 ASCII digits; the route segment
    /// must be non-empty alphanumeric.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }

        let Some((zip, route)) = s.split_once('-') else {
            return Err(IdError::InvalidFormat {
                message: format!("'{s}' is missing the '-' between zip and route"),
            });
        };

        if zip.len() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdError::InvalidFormat {
                message: format!("'{zip}' is not a 5-digit zip code"),
            });
        }

        if route.is_empty() || !route.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(IdError::InvalidFormat {
                message: format!("'{route}' is not a valid route segment"),
            });
        }

        Ok(Self {
            zip: zip.to_string(),
            route: route.to_string(),
        })
    }

    /// Returns the zip code segment.
    #[must_use]
    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// Returns the route segment.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }
}

impl std::fmt::Display for ZipCodeRouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.zip, self.route)
    }
}

impl std::str::FromStr for ZipCodeRouteId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for ZipCodeRouteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ZipCodeRouteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
