//! Enum lookup by variant name.

use std::any::type_name;

use crate::error::{Error, Result};

/// Field-less enum whose variants can be listed and named at run time.
///
/// Implement it by hand or with [`enum_variants!`](crate::enum_variants).
pub trait EnumVariants: Copy + 'static {
    /// All variants in declaration order.
    fn variants() -> &'static [Self];

    /// Name of this variant as written in the source.
    fn name(&self) -> &'static str;
}

/// Implements [`EnumVariants`] for a field-less enum.
///
/// # Example
///
/// ```
/// use toolsmith_core::conversion::enums::{parse_enum, EnumVariants};
/// use toolsmith_core::enum_variants;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// enum_variants!(Level { Low, High });
///
/// assert_eq!(parse_enum::<Level>("high").unwrap(), Level::High);
/// assert_eq!(Level::Low.name(), "Low");
/// ```
#[macro_export]
macro_rules! enum_variants {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::conversion::enums::EnumVariants for $ty {
            fn variants() -> &'static [Self] {
                &[$($ty::$variant),+]
            }

            fn name(&self) -> &'static str {
                match self {
                    $($ty::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

/// Returns the first variant of `T` named `input`.
///
/// With `ignore_case` the comparison ignores ASCII case.
pub fn to_enum<T: EnumVariants>(input: &str, ignore_case: bool) -> Result<T> {
    T::variants()
        .iter()
        .copied()
        .find(|variant| {
            let name = variant.name();
            if ignore_case {
                name.eq_ignore_ascii_case(input)
            } else {
                name == input
            }
        })
        .ok_or_else(|| Error::NoMatchingVariant {
            input: input.to_string(),
            type_name: type_name::<T>(),
        })
}

/// Case-insensitive [`to_enum`].
pub fn parse_enum<T: EnumVariants>(input: &str) -> Result<T> {
    to_enum(input, true)
}
