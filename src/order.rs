use std::borrow::Cow;
use std::path::PathBuf;

use crate::convert::Convert;
use crate::error::ParseError;

/// A declared set of value types accepted in any cyclic rotation of their
/// declared order.
///
/// The search is bounded: the declared list is parsed left-to-right, and on
/// failure the list is rotated (first element moved to the end) and retried,
/// up to one full cycle. Whichever rotation matches, the parsed values are
/// reported back in the declared order. An input order that is a non-cyclic
/// permutation of the declared order (possible from three elements up) is
/// deliberately not found; the search fails with
/// [`ParseError::PermutationExhausted`] after the cycle completes.
///
/// ### Example
/// ```
/// use argot::{AnyOrder, Convert};
///
/// let tokens = vec!["tag".to_string(), "7".to_string()];
/// let (AnyOrder((number, word)), remaining) =
///     AnyOrder::<(u32, String)>::convert(&tokens).unwrap();
/// assert_eq!(number, 7);
/// assert_eq!(&word, "tag");
/// assert!(remaining.is_empty());
/// ```
#[derive(Debug, PartialEq)]
pub struct AnyOrder<T>(pub T);

impl<T> AnyOrder<T> {
    /// Unwrap into the declared-order tuple of values.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Element behaviour inside an [`AnyOrder`] rotation.
///
/// Most types parse identically in every position and take the default
/// methods. `Option<T>` is the exception: in the interior of a rotation it is
/// strict (absence or an unconvertible head token forces the next rotation,
/// so the optional cannot swallow a token that belongs to a later element),
/// while in the terminal position absence is genuine and succeeds with
/// `None`.
///
/// User-defined leaf types participate with an empty impl:
/// `impl Slot for MyType {}`.
pub trait Slot: Convert {
    /// Parse as a non-terminal element of the current rotation.
    fn interior(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        Self::convert(tokens)
    }

    /// Parse as the last remaining element of the current rotation.
    fn terminal(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        Self::convert(tokens)
    }
}

macro_rules! slot_default {
    ($($type:ty)+) => {
        $(impl Slot for $type {})+
    };
}

slot_default!(u8 u16 u32 u64 i8 i16 i32 i64 usize isize f32 f64 bool String PathBuf);

impl<T: Convert> Slot for Option<T> {
    fn interior(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        if tokens.is_empty() {
            return Err(ParseError::MissingArguments);
        }
        let (value, remaining) = T::convert(tokens)?;
        Ok((Some(value), remaining))
    }
}

macro_rules! slot_sequence {
    ($first:ident) => {
        impl<$first: Convert> Slot for ($first,) {}
    };
    ($first:ident $($rest:ident)+) => {
        impl<$first: Convert, $($rest: Convert),+> Slot for ($first, $($rest),+) {}
        slot_sequence!($($rest)+);
    };
}

slot_sequence!(T1 T2 T3 T4 T5 T6 T7 T8);

impl<T> Slot for AnyOrder<T> where AnyOrder<T>: Convert {}

// Attempt one rotation: all elements but the last parse via `Slot::interior`,
// the last via `Slot::terminal`. A full success returns out of the enclosing
// `convert`, binding the values back to the declared-order tuple; any element
// failure abandons the attempt and falls through to the next rotation.
macro_rules! try_rotation {
    ($tokens:ident, ($($declared:ident),+), [$($interior:ident),* ; $terminal:ident]) => {
        'rotation: {
            let remaining = $tokens;
            $(
                let ($interior, remaining) = match <$interior as Slot>::interior(remaining) {
                    Ok(converted) => converted,
                    Err(_error) => {
                        #[cfg(feature = "tracing_debug")]
                        tracing::debug!(
                            "rotation abandoned at {}: {_error}",
                            <$interior as Convert>::name()
                        );
                        break 'rotation;
                    }
                };
            )*
            let ($terminal, remaining) = match <$terminal as Slot>::terminal(remaining) {
                Ok(converted) => converted,
                Err(_error) => {
                    #[cfg(feature = "tracing_debug")]
                    tracing::debug!(
                        "rotation abandoned at {}: {_error}",
                        <$terminal as Convert>::name()
                    );
                    break 'rotation;
                }
            };
            return Ok((AnyOrder(($($declared,)+)), remaining));
        }
    };
}

impl<A: Slot> Convert for AnyOrder<(A,)> {
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        let (value, remaining) = A::terminal(tokens)?;
        Ok((AnyOrder((value,)), remaining))
    }

    fn name() -> Cow<'static, str> {
        A::name()
    }
}

impl<A: Slot, B: Slot> Convert for AnyOrder<(A, B)> {
    #[allow(non_snake_case)]
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        try_rotation!(tokens, (A, B), [A; B]);
        try_rotation!(tokens, (A, B), [B; A]);
        Err(ParseError::PermutationExhausted {
            type_names: Self::name(),
        })
    }

    fn name() -> Cow<'static, str> {
        Cow::Owned([A::name(), B::name()].join(", "))
    }
}

impl<A: Slot, B: Slot, C: Slot> Convert for AnyOrder<(A, B, C)> {
    #[allow(non_snake_case)]
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        try_rotation!(tokens, (A, B, C), [A, B; C]);
        try_rotation!(tokens, (A, B, C), [B, C; A]);
        try_rotation!(tokens, (A, B, C), [C, A; B]);
        Err(ParseError::PermutationExhausted {
            type_names: Self::name(),
        })
    }

    fn name() -> Cow<'static, str> {
        Cow::Owned([A::name(), B::name(), C::name()].join(", "))
    }
}

impl<A: Slot, B: Slot, C: Slot, D: Slot> Convert for AnyOrder<(A, B, C, D)> {
    #[allow(non_snake_case)]
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        try_rotation!(tokens, (A, B, C, D), [A, B, C; D]);
        try_rotation!(tokens, (A, B, C, D), [B, C, D; A]);
        try_rotation!(tokens, (A, B, C, D), [C, D, A; B]);
        try_rotation!(tokens, (A, B, C, D), [D, A, B; C]);
        Err(ParseError::PermutationExhausted {
            type_names: Self::name(),
        })
    }

    fn name() -> Cow<'static, str> {
        Cow::Owned([A::name(), B::name(), C::name(), D::name()].join(", "))
    }
}

impl<A: Slot, B: Slot, C: Slot, D: Slot, E: Slot> Convert for AnyOrder<(A, B, C, D, E)> {
    #[allow(non_snake_case)]
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        try_rotation!(tokens, (A, B, C, D, E), [A, B, C, D; E]);
        try_rotation!(tokens, (A, B, C, D, E), [B, C, D, E; A]);
        try_rotation!(tokens, (A, B, C, D, E), [C, D, E, A; B]);
        try_rotation!(tokens, (A, B, C, D, E), [D, E, A, B; C]);
        try_rotation!(tokens, (A, B, C, D, E), [E, A, B, C; D]);
        Err(ParseError::PermutationExhausted {
            type_names: Self::name(),
        })
    }

    fn name() -> Cow<'static, str> {
        Cow::Owned([A::name(), B::name(), C::name(), D::name(), E::name()].join(", "))
    }
}

impl<A: Slot, B: Slot, C: Slot, D: Slot, E: Slot, F: Slot> Convert
    for AnyOrder<(A, B, C, D, E, F)>
{
    #[allow(non_snake_case)]
    fn convert(tokens: &[String]) -> Result<(Self, &[String]), ParseError> {
        try_rotation!(tokens, (A, B, C, D, E, F), [A, B, C, D, E; F]);
        try_rotation!(tokens, (A, B, C, D, E, F), [B, C, D, E, F; A]);
        try_rotation!(tokens, (A, B, C, D, E, F), [C, D, E, F, A; B]);
        try_rotation!(tokens, (A, B, C, D, E, F), [D, E, F, A, B; C]);
        try_rotation!(tokens, (A, B, C, D, E, F), [E, F, A, B, C; D]);
        try_rotation!(tokens, (A, B, C, D, E, F), [F, A, B, C, D; E]);
        Err(ParseError::PermutationExhausted {
            type_names: Self::name(),
        })
    }

    fn name() -> Cow<'static, str> {
        Cow::Owned(
            [
                A::name(),
                B::name(),
                C::name(),
                D::name(),
                E::name(),
                F::name(),
            ]
            .join(", "),
        )
    }
}
