macro_rules! id {
    ($ident:ident) => {
        #[::nutype::nutype(
            validate(greater = 0),
            derive(
                Debug,
                Clone,
                Copy,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                Deref,
                Display,
                TryFrom,
                Serialize,
                Deserialize
            )
        )]
        pub struct $ident(i64);

        impl ::std::str::FromStr for $ident {
            type Err = $crate::InvalidIdentifier;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::parse_id(s)
                    .and_then(|id| Self::try_new(id).map_err(|_| $crate::InvalidIdentifier))
            }
        }
    };
}

macro_rules! nutype_string {
    ($ident:ident($($args:tt)*)) => {
        #[::nutype::nutype(
            $($args)*,
            derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
        )]
        pub struct $ident(String);
    };
}

pub(crate) use id;
pub(crate) use nutype_string;
