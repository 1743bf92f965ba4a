mod phonenumber;
pub(crate) mod regex_util;

/// There are places where the same boilerplate would be repeated for every
/// number category; the macros name what happens there more clearly than a
/// few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use phonenumber::{
    classifier::PhoneClassifier,
    enums::{NumberCategory, NumberType},
    errors::UndefinedPredicateError,
    phone_number::PhoneNumber,
    normalize, to_international, to_local, PHONE_CLASSIFIER,
};
