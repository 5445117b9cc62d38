use crate::macros::nutype_string;

nutype_string!(EmailAddress(validate(
    len_char_max = 254,
    predicate = |x: &str| x.parse::<::lettre::Address>().is_ok()
)));
