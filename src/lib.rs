pub mod arrays;
pub mod error;
pub mod predicates;

pub use arrays::{non_empty_keys, non_empty_map, object_keys, require_non_empty_array, NonEmpty};
pub use error::{GuardError, Result};
pub use predicates::{
    is_non_empty_array, is_string, object_has_non_empty_array_property, object_has_only_properties_that_match_predicate,
    object_has_property, object_has_property_that_equals, object_only_has_that_property,
    property_exists_on_object, value_is_non_array_object, Predicate,
};
