//! DRY macro for the closed enums that make up a learner profile.
//!
//! Every profile field is a small closed set of lowercase words. The
//! **`learner_enum!`** macro generates, for one field:
//!
//! - the enum itself with `serde` lowercase (de)serialization
//! - `ALL`, every variant in declaration order (used by totality tests)
//! - `as_str()` returning the lowercase wire word
//! - `Display` and `FromStr` over that same word
//!
//! # Usage
//!
//! ```ignore
//! learner_enum! {
//!     /// Preferred pace through material
//!     PacePreference {
//!         Fast => "fast",
//!         Moderate => "moderate",
//!         Slow => "slow",
//!     }
//! }
//! ```

#[macro_export]
macro_rules! learner_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $word:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Lowercase word used on the wire and in profile codes.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $word),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::foundation::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($word => Ok($name::$variant),)+
                    other => Err($crate::domain::foundation::ValidationError::invalid_format(
                        stringify!($name),
                        format!("unknown value '{}'", other),
                    )),
                }
            }
        }
    };
}
