//! Macro for implementing Display, FromStr and serde for status enums
//!
//! Status values arrive from the HR backend in several spellings
//! (`"In-Service"`, `"in service"`, `"IN_SERVICE"`). The macro maps each
//! variant to one canonical display string and parses any spelling that
//! matches it once case, spaces, hyphens and underscores are ignored.
//!
//! # Example
//!
//! ```rust
//! use hrms_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ReviewStatus {
//!     Pending,
//!     Decided,
//! }
//!
//! impl_domain_status_conversions!(ReviewStatus {
//!     Pending => "Pending",
//!     Decided => "Decided",
//! });
//!
//! assert_eq!("PENDING".parse::<ReviewStatus>().unwrap(), ReviewStatus::Pending);
//! assert_eq!(ReviewStatus::Decided.to_string(), "Decided");
//! ```

/// Reduce a status spelling to lowercase alphanumerics for comparison
pub fn normalize_status_token(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_lowercase()).collect()
}

/// Implements Display, FromStr, Serialize and Deserialize for status enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their canonical display
///   strings
///
/// Serialization writes the canonical string; deserialization accepts any
/// spelling `FromStr` accepts.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical display string for this value
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = $crate::macros::normalize_status_token(s);
                $(
                    if !key.is_empty() && key == $crate::macros::normalize_status_token($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }

        impl ::serde::Serialize for $enum_name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $enum_name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}
