//! Macros for wiring conversion factors into the type system.

/// Implements [`ConvertTo`](crate::ConvertTo) for each `FACTOR: From => To` entry.
macro_rules! impl_conversions {
    ($($factor:ident: $from:ty => $to:ty),+ $(,)?) => {
        $(
            impl $crate::ConvertTo<$to> for $from {
                const FACTOR: $crate::Factor<$from, $to> = $factor;
            }
        )+
    };
}

pub(crate) use impl_conversions;
