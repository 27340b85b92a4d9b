//! Leaf value generators, one per type tag.

pub mod numeric;
pub mod token;

use rand::Rng;
use schema_core::{RandomValue, TypeTag};

/// Generate a leaf value for a type tag.
///
/// Unsupported tags yield `RandomValue::Null`; reporting them is left to the
/// caller, which knows the key path.
pub fn generate_leaf<R: Rng>(tag: &TypeTag, rng: &mut R) -> RandomValue {
    match tag {
        TypeTag::Number => numeric::generate_number(rng),
        TypeTag::String => RandomValue::String(token::generate_token(rng)),
        TypeTag::Boolean => RandomValue::Bool(rng.gen_bool(0.5)),
        TypeTag::Array => generate_array(rng),
        TypeTag::Object => RandomValue::empty_object(),
        TypeTag::Unsupported(_) => RandomValue::Null,
    }
}

/// Generate a single-element array holding one random token.
pub fn generate_array<R: Rng>(rng: &mut R) -> RandomValue {
    RandomValue::Array(vec![RandomValue::String(token::generate_token(rng))])
}
