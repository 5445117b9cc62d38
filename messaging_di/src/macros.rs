/// Declares a provider struct.
///
/// Plain fields are the root values handed out as clones. A `..field: Base {
/// Types, }` entry nests another provider and forwards the listed types to it.
/// The generated `from_parts` constructor takes the fields in declaration
/// order and starts with an empty cache.
#[macro_export]
macro_rules! provider {
    (@root $ident:ident, $field:ident: $ty:ty) => {
        impl $crate::Build<$ident> for $ty {
            fn build(provider: &mut $ident) -> Self {
                ::core::clone::Clone::clone(&provider.$field)
            }
        }
    };

    (@forward $ident:ident, $nested:ident: $ty:ty) => {
        impl $crate::Build<$ident> for $ty {
            fn build(provider: &mut $ident) -> Self {
                $crate::Provide::provide(&mut provider.$nested)
            }
        }
    };

    ($(#[doc=$doc:literal])* $vis:vis $ident:ident {
        $( $field:ident: $ty:ty, )*
        $( .. $nested:ident: $base:ty { $($forwarded:ty,)* $(,)? } )*
    }) => {
        $(#[doc=$doc])*
        $vis struct $ident {
            cache: $crate::TypeMap,
            $( $field: $ty, )*
            $( $nested: $base, )*
        }

        impl $ident {
            #[allow(clippy::too_many_arguments)]
            $vis fn from_parts($( $field: $ty, )* $( $nested: $base, )*) -> Self {
                Self {
                    cache: $crate::TypeMap::default(),
                    $( $field, )*
                    $( $nested, )*
                }
            }
        }

        impl $crate::Provider for $ident {
            fn cache(&mut self) -> &mut $crate::TypeMap {
                &mut self.cache
            }
        }

        $( $crate::provider!(@root $ident, $field: $ty); )*
        $($( $crate::provider!(@forward $ident, $nested: $forwarded); )*)*
    };
}
