// std::borrow::Cow
// std::option::Option

/// This macro extracts owned value from cow
/// but if cow is borrowed it returns default given value
/// 
/// it's helpful when function returns `Cow<'_, T>` as result,
/// where `Cow::Borrowed` option marks that value was not modified
/// and we can use owned original instead of copying it.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

/// Generates a `is_x` / `is_not_x` pair per category, both routed through
/// the generic [`crate::PhoneNumber::is`] and [`crate::PhoneNumber::is_not`],
/// so a new category only needs one more line in the invocation.
macro_rules! category_predicates {
    ($( $category:ident => $is:ident, $is_not:ident; )+) => {
        $(
            #[doc = concat!("Checks whether the number is classified as `", stringify!($category), "`.")]
            pub fn $is(&self) -> bool {
                self.is($crate::NumberCategory::$category)
            }

            #[doc = concat!("Complement of [`Self::", stringify!($is), "`].")]
            pub fn $is_not(&self) -> bool {
                self.is_not($crate::NumberCategory::$category)
            }
        )+
    };
}

pub(crate) use owned_from_cow_or;
pub(crate) use category_predicates;
