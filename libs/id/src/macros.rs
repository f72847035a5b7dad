//! Macros for defining typed identifier types.

/// Macro to define a typed identifier with a specific prefix.
///
/// This generates a newtype wrapper around the validated raw string with:
/// - A `PREFIX` constant
/// - `parse()` to parse from string, the only constructor
/// - `value()` returning the raw string unchanged
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations
/// - `Eq` and `Hash` defined over the raw string
///
/// # Example
///
/// ```ignore
/// define_id!(AddressId, "adr");
/// define_id!(JobId, "job");
///
/// let id = AddressId::parse("adr_43769b47aed248c2")?;
/// assert_eq!(id.value(), "adr_43769b47aed248c2");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        /// A typed identifier for this resource type.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// The prefix for this identifier type.
            pub const PREFIX: &'static str = $prefix;

            /// Parses an identifier from a string.
            ///
            /// The string must be in the format `{prefix}_{hex}`: a known
            /// 3-letter prefix, one underscore, and 16 lowercase hex digits.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                if s.is_empty() {
                    return Err($crate::IdError::Empty);
                }

                let segments: Vec<&str> = s.split('_').collect();
                let [prefix, suffix] = segments[..] else {
                    return Err($crate::IdError::MissingSeparator);
                };
                if prefix.is_empty() || suffix.is_empty() {
                    return Err($crate::IdError::MissingSeparator);
                }

                if s.len() != $crate::ID_LENGTH {
                    return Err($crate::IdError::WrongLength {
                        expected: $crate::ID_LENGTH,
                        actual: s.len(),
                    });
                }

                if !$crate::KNOWN_PREFIXES.contains(&prefix) {
                    return Err($crate::IdError::UnknownPrefix(prefix.to_string()));
                }

                if prefix != Self::PREFIX {
                    return Err($crate::IdError::PrefixMismatch {
                        expected: Self::PREFIX,
                        actual: prefix.to_string(),
                    });
                }

                let lowercase_hex = suffix
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
                if !lowercase_hex {
                    return Err($crate::IdError::InvalidSuffix(suffix.to_string()));
                }

                Ok(Self(s.to_string()))
            }

            /// Returns the raw identifier string.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}
