// File: src/options.rs
// Purpose: Enumerated option sets offered by the choice fields

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Submitted values, in display order
            pub const VALUES: &'static [&'static str] = &[$($value,)+];

            /// Value as submitted by the form
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Human readable label
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = FormError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(FormError::UnknownOption {
                        set: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

option_set! {
    /// Countries offered by the country select.
    ///
    /// The empty string is the "Select" sentinel and is never a valid country.
    Country {
        India => "India", "India";
        Canada => "Canada", "Canada";
        Australia => "Australia", "Australia";
        UnitedKingdom => "United Kingdom", "United Kingdom";
    }
}

option_set! {
    /// Gender radio options
    Gender {
        Male => "male", "Male";
        Female => "female", "Female";
        Other => "other", "Other";
    }
}

option_set! {
    /// Hobbies/interests offered by the multi-select
    Hobby {
        Reading => "reading", "Reading";
        Sports => "sports", "Sports";
        Traveling => "traveling", "Traveling";
        Music => "music", "Music";
    }
}
