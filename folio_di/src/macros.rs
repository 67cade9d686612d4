/// Declares a provider struct.
///
/// Plain fields are leaf values handed out by cloning. A `..field: Base { T, .. }`
/// entry delegates the listed types to a nested provider. The generated struct
/// also holds the build cache in a `_cache` field, which starts out empty.
#[macro_export]
macro_rules! provider {
    (@leaf $ident:ident, $field:ident: $ty:ty) => {
        impl $crate::Build<$ident> for $ty {
            fn build(provider: &mut $ident) -> Self {
                ::core::clone::Clone::clone(&provider.$field)
            }
        }
    };

    (@delegate $ident:ident, $bfield:ident: $ty:ty) => {
        impl $crate::Build<$ident> for $ty {
            fn build(provider: &mut $ident) -> Self {
                $crate::Provide::provide(&mut provider.$bfield)
            }
        }
    };

    ($(#[doc=$doc:literal])* $vis:vis $ident:ident {
        $( $field:ident: $ty:ty, )*
        $( .. $bfield:ident: $base:ty { $($ity:ty,)* $(,)? } )*
    }) => {
        $(#[doc=$doc])*
        $vis struct $ident {
            _cache: $crate::TypeMap,
            $( $field: $ty, )*
            $( $bfield: $base, )*
        }

        impl $crate::Provider for $ident {
            fn cache(&mut self) -> &mut $crate::TypeMap {
                &mut self._cache
            }
        }

        $( $crate::provider!(@leaf $ident, $field: $ty); )*
        $( $( $crate::provider!(@delegate $ident, $bfield: $ity); )* )*
    };
}
