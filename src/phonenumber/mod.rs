mod helper_constants;
mod helper_functions;
mod category_patterns;
pub mod errors;
pub mod enums;
pub mod classifier;
pub mod phone_number;

use std::sync::LazyLock;

pub use enums::{NumberCategory, NumberType};
pub use helper_functions::{normalize, to_international, to_local};
use crate::phonenumber::classifier::PhoneClassifier;

pub static PHONE_CLASSIFIER: LazyLock<PhoneClassifier> = LazyLock::new(|| {
    PhoneClassifier::new()
});
