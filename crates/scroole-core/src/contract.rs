//! The equality and hash contract of generated classes.
//!
//! Each field type category selects a [`HashStrategy`] and an
//! [`EqualityStrategy`]. The Java generator renders these strategies as source
//! text; [`hash_code`] and [`equals`] evaluate them over a small [`Value`] model
//! with the same semantics as the generated methods running on a JVM.
//!
//! The constants below are part of the generated code's observable behavior:
//! changing them changes every hash code of every regenerated class.

use crate::error::{ScrooleError, ScrooleResult};
use crate::types::{ScalarKind, TypeCategory};

/// Multiplier of the hash accumulator.
pub const HASH_PRIME: i32 = 31;

/// Initial value of the hash accumulator.
pub const HASH_SEED: i32 = 1;

/// Hash contribution of `true`.
pub const TRUE_HASH: i32 = 1231;

/// Hash contribution of `false`.
pub const FALSE_HASH: i32 = 1237;

/// `Float.floatToIntBits` of any NaN.
const CANONICAL_FLOAT_NAN: i32 = 0x7fc0_0000;

/// `Double.doubleToLongBits` of any NaN.
const CANONICAL_DOUBLE_NAN: i64 = 0x7ff8_0000_0000_0000;

/// How a field contributes to the hash accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashStrategy {
    /// `byte`, `short`, `int`, `char`: the value widened to `int`.
    Value,
    /// `boolean`: one of two fixed constants.
    BooleanConstants,
    /// `long`: upper and lower 32 bits XOR-folded.
    LongFold,
    /// `float`: the 32-bit pattern.
    FloatBits,
    /// `double`: the 64-bit pattern, XOR-folded through a temporary.
    DoubleBitsFold,
    /// Arrays of scalars or references: `Arrays.hashCode`.
    ArrayContents,
    /// Arrays of arrays: `Arrays.deepHashCode`.
    DeepArrayContents,
    /// References: `0` for `null`, else the value's own hash.
    NullSafeReference,
}

impl HashStrategy {
    pub fn for_type(ty: &TypeCategory) -> Self {
        match ty {
            TypeCategory::Scalar(kind) => match kind {
                ScalarKind::Boolean => HashStrategy::BooleanConstants,
                ScalarKind::Long => HashStrategy::LongFold,
                ScalarKind::Float => HashStrategy::FloatBits,
                ScalarKind::Double => HashStrategy::DoubleBitsFold,
                ScalarKind::Byte | ScalarKind::Short | ScalarKind::Int | ScalarKind::Char => {
                    HashStrategy::Value
                }
            },
            TypeCategory::Array(_) if ty.is_nested_array() => HashStrategy::DeepArrayContents,
            TypeCategory::Array(_) => HashStrategy::ArrayContents,
            TypeCategory::Reference(_) => HashStrategy::NullSafeReference,
        }
    }
}

/// How two values of a field are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqualityStrategy {
    /// Integral and boolean scalars: `==`.
    Value,
    /// `float`: compare `Float.floatToIntBits`.
    FloatBits,
    /// `double`: compare `Double.doubleToLongBits`.
    DoubleBits,
    /// Arrays of scalars or references: `Arrays.equals`.
    ArrayContents,
    /// Arrays of arrays: `Arrays.deepEquals`.
    DeepArrayContents,
    /// References: both `null`, or `left.equals(right)`.
    NullSafeReference,
}

impl EqualityStrategy {
    pub fn for_type(ty: &TypeCategory) -> Self {
        match ty {
            TypeCategory::Scalar(ScalarKind::Float) => EqualityStrategy::FloatBits,
            TypeCategory::Scalar(ScalarKind::Double) => EqualityStrategy::DoubleBits,
            TypeCategory::Scalar(_) => EqualityStrategy::Value,
            TypeCategory::Array(_) if ty.is_nested_array() => EqualityStrategy::DeepArrayContents,
            TypeCategory::Array(_) => EqualityStrategy::ArrayContents,
            TypeCategory::Reference(_) => EqualityStrategy::NullSafeReference,
        }
    }
}

/// A runtime value of a generated field.
///
/// References are modelled as Java strings; their `hashCode` and `equals`
/// follow `java.lang.String`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Char(u16),
    Float(f32),
    Double(f64),
    Array(Option<Vec<Value>>),
    Reference(Option<String>),
}

impl Value {
    fn describe(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Byte(_) => "byte",
            Value::Short(_) => "short",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Char(_) => "char",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Array(_) => "array",
            Value::Reference(_) => "reference",
        }
    }

    fn fits(&self, ty: &TypeCategory) -> bool {
        match (ty, self) {
            (TypeCategory::Scalar(kind), value) => kind.keyword() == value.describe(),
            (TypeCategory::Array(_), Value::Array(_)) => true,
            (TypeCategory::Reference(_), Value::Reference(_)) => true,
            _ => false,
        }
    }
}

/// `Float.floatToIntBits`: the bit pattern, with every NaN collapsed to one.
pub fn float_to_int_bits(value: f32) -> i32 {
    if value.is_nan() {
        CANONICAL_FLOAT_NAN
    } else {
        value.to_bits() as i32
    }
}

/// `Double.doubleToLongBits`: the bit pattern, with every NaN collapsed to one.
pub fn double_to_long_bits(value: f64) -> i64 {
    if value.is_nan() {
        CANONICAL_DOUBLE_NAN
    } else {
        value.to_bits() as i64
    }
}

/// `(int) (value ^ (value >>> 32))`
pub fn fold_long(value: i64) -> i32 {
    (value ^ ((value as u64) >> 32) as i64) as i32
}

/// `String.hashCode`
pub fn string_hash(value: &str) -> i32 {
    value.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(HASH_PRIME).wrapping_add(i32::from(unit))
    })
}

fn accumulate(result: i32, contribution: i32) -> i32 {
    HASH_PRIME.wrapping_mul(result).wrapping_add(contribution)
}

fn mismatch(ty: &TypeCategory, value: &Value) -> ScrooleError {
    ScrooleError::ValueTypeMismatch {
        expected: ty.to_string(),
        found: value.describe().to_string(),
    }
}

/// The hash contribution of one field value.
pub fn hash_contribution(ty: &TypeCategory, value: &Value) -> ScrooleResult<i32> {
    if !value.fits(ty) {
        return Err(mismatch(ty, value));
    }

    let contribution = match (HashStrategy::for_type(ty), value) {
        (HashStrategy::BooleanConstants, Value::Boolean(b)) => {
            if *b {
                TRUE_HASH
            } else {
                FALSE_HASH
            }
        }
        (HashStrategy::Value, Value::Byte(v)) => i32::from(*v),
        (HashStrategy::Value, Value::Short(v)) => i32::from(*v),
        (HashStrategy::Value, Value::Int(v)) => *v,
        (HashStrategy::Value, Value::Char(v)) => i32::from(*v),
        (HashStrategy::LongFold, Value::Long(v)) => fold_long(*v),
        (HashStrategy::FloatBits, Value::Float(v)) => float_to_int_bits(*v),
        (HashStrategy::DoubleBitsFold, Value::Double(v)) => fold_long(double_to_long_bits(*v)),
        (
            HashStrategy::ArrayContents | HashStrategy::DeepArrayContents,
            Value::Array(elements),
        ) => match (ty.element(), elements) {
            (_, None) => 0,
            (Some(element), Some(items)) => items.iter().try_fold(HASH_SEED, |result, item| {
                Ok::<_, ScrooleError>(accumulate(result, hash_contribution(element, item)?))
            })?,
            (None, Some(_)) => return Err(mismatch(ty, value)),
        },
        (HashStrategy::NullSafeReference, Value::Reference(reference)) => {
            reference.as_deref().map_or(0, string_hash)
        }
        _ => return Err(mismatch(ty, value)),
    };

    Ok(contribution)
}

/// Whether two values of one field compare equal.
pub fn field_equals(ty: &TypeCategory, left: &Value, right: &Value) -> ScrooleResult<bool> {
    if !left.fits(ty) {
        return Err(mismatch(ty, left));
    }
    if !right.fits(ty) {
        return Err(mismatch(ty, right));
    }

    let equal = match (EqualityStrategy::for_type(ty), left, right) {
        (EqualityStrategy::FloatBits, Value::Float(a), Value::Float(b)) => {
            float_to_int_bits(*a) == float_to_int_bits(*b)
        }
        (EqualityStrategy::DoubleBits, Value::Double(a), Value::Double(b)) => {
            double_to_long_bits(*a) == double_to_long_bits(*b)
        }
        (EqualityStrategy::Value, a, b) => a == b,
        (
            EqualityStrategy::ArrayContents | EqualityStrategy::DeepArrayContents,
            Value::Array(a),
            Value::Array(b),
        ) => match (ty.element(), a, b) {
            (_, None, None) => true,
            (Some(element), Some(a), Some(b)) if a.len() == b.len() => {
                for (x, y) in a.iter().zip(b) {
                    if !field_equals(element, x, y)? {
                        return Ok(false);
                    }
                }
                true
            }
            _ => false,
        },
        (EqualityStrategy::NullSafeReference, Value::Reference(a), Value::Reference(b)) => a == b,
        _ => return Err(mismatch(ty, left)),
    };

    Ok(equal)
}

/// What the generated `hashCode()` returns for an instance.
pub fn hash_code(fields: &[(TypeCategory, Value)]) -> ScrooleResult<i32> {
    fields
        .iter()
        .try_fold(HASH_SEED, |result, (ty, value)| {
            Ok(accumulate(result, hash_contribution(ty, value)?))
        })
}

/// What the generated `equals(Object)` returns for two instances.
///
/// Instances whose field types differ are of different classes and never equal.
pub fn equals(
    left: &[(TypeCategory, Value)],
    right: &[(TypeCategory, Value)],
) -> ScrooleResult<bool> {
    if left.len() != right.len() || left.iter().zip(right).any(|((a, _), (b, _))| a != b) {
        return Ok(false);
    }

    for ((ty, a), (_, b)) in left.iter().zip(right) {
        if !field_equals(ty, a, b)? {
            return Ok(false);
        }
    }
    Ok(true)
}
