/// Declare an integer-backed enum with an `Unknown(u8)` fallback.
///
/// Generates `From<u8>`, `From<Enum> for u8`, serde support through those
/// conversions, `Default`, [`WireEnum`] and the [`IntoChange`] bridge to the
/// named [`ChangeValue`] variant.
///
/// ```ignore
/// wire_enum! {
///     /// Sort order of forum posts.
///     pub enum SortOrder => ChangeValue::SortOrder {
///         LatestActivity = 0 => "latest activity",
///         CreationDate = 1 => "creation date",
///     }
///     default = LatestActivity;
/// }
/// ```
///
/// [`WireEnum`]: crate::types::util::WireEnum
/// [`IntoChange`]: crate::value::IntoChange
/// [`ChangeValue`]: crate::value::ChangeValue
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => ChangeValue::$change:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal => $label:literal,
            )+
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, Eq, Hash, PartialEq, ::serde::Deserialize, ::serde::Serialize,
        )]
        #[serde(from = "u8", into = "u8")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Variant value is unknown to the library.
            Unknown(u8),
        }

        impl From<u8> for $name {
            fn from(value: u8) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    unknown => Self::Unknown(unknown),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                match value {
                    $( $name::$variant => $value, )+
                    $name::Unknown(unknown) => unknown,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $crate::types::util::WireEnum for $name {
            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                    Self::Unknown(_) => "unknown",
                }
            }
        }

        $crate::value::into_change!(domain $name => $change);
    };
}

pub(crate) use wire_enum;
