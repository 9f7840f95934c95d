//! Representation of the payload of a DICOM data element.
//!
//! A value has one shape per VR class: single or multiple character
//! strings, arrays of fixed-size numbers, an opaque byte buffer, or a
//! sequence of nested data sets. Multi-valued payloads are kept in the
//! aggregation type [`C`], which stores the common single-value case
//! inline, without a heap allocation.

use num_traits::NumCast;
use smallvec::SmallVec;

use crate::header::VR;
use crate::sequence::Sequence;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// An array of numeric values, one variant per scalar type
/// used by the numeric value representations.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    /// Signed 16-bit integers (`SS`).
    I16(C<i16>),
    /// Signed 32-bit integers (`SL`).
    I32(C<i32>),
    /// Signed 64-bit integers (`SV`).
    I64(C<i64>),
    /// Unsigned 16-bit integers (`US`).
    U16(C<u16>),
    /// Unsigned 32-bit integers (`UL`).
    U32(C<u32>),
    /// Unsigned 64-bit integers (`UV`).
    U64(C<u64>),
    /// 32-bit floating point numbers (`FL`).
    F32(C<f32>),
    /// 64-bit floating point numbers (`FD`).
    F64(C<f64>),
}

/// A utility macro for implementing the conversion from a numeric array
/// into the corresponding numeric value variant.
macro_rules! impl_from_for_numeric {
    ($typ: ty, $variant: ident) => {
        impl From<Vec<$typ>> for NumericValue {
            fn from(value: Vec<$typ>) -> Self {
                NumericValue::$variant(value.into())
            }
        }

        impl From<C<$typ>> for NumericValue {
            fn from(value: C<$typ>) -> Self {
                NumericValue::$variant(value)
            }
        }
    };
}

impl_from_for_numeric!(i16, I16);
impl_from_for_numeric!(i32, I32);
impl_from_for_numeric!(i64, I64);
impl_from_for_numeric!(u16, U16);
impl_from_for_numeric!(u32, U32);
impl_from_for_numeric!(u64, U64);
impl_from_for_numeric!(f32, F32);
impl_from_for_numeric!(f64, F64);

impl NumericValue {
    /// The number of scalar values in the array.
    pub fn len(&self) -> usize {
        use NumericValue::*;
        match self {
            I16(v) => v.len(),
            I32(v) => v.len(),
            I64(v) => v.len(),
            U16(v) => v.len(),
            U32(v) => v.len(),
            U64(v) => v.len(),
            F32(v) => v.len(),
            F64(v) => v.len(),
        }
    }

    /// Whether the array holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this array's scalar type is the native type
    /// of the given value representation.
    pub fn matches_vr(&self, vr: VR) -> bool {
        matches!(
            (self, vr),
            (NumericValue::I16(_), VR::SS)
                | (NumericValue::I32(_), VR::SL)
                | (NumericValue::I64(_), VR::SV)
                | (NumericValue::U16(_), VR::US)
                | (NumericValue::U32(_), VR::UL)
                | (NumericValue::U64(_), VR::UV)
                | (NumericValue::F32(_), VR::FL)
                | (NumericValue::F64(_), VR::FD)
        )
    }

    /// The name of the array's scalar type, for diagnostics.
    pub fn scalar_name(&self) -> &'static str {
        use NumericValue::*;
        match self {
            I16(_) => "i16",
            I32(_) => "i32",
            I64(_) => "i64",
            U16(_) => "u16",
            U32(_) => "u32",
            U64(_) => "u64",
            F32(_) => "f32",
            F64(_) => "f64",
        }
    }

    /// Read the value at `index` as a signed 64-bit integer,
    /// sign- or zero-extending and wrapping where the scalar type
    /// requires it. Returns `None` when the index is out of range.
    pub fn int_at(&self, index: usize) -> Option<i64> {
        use NumericValue::*;
        match self {
            I16(v) => v.get(index).map(|x| <i64 as From<i16>>::from(*x)),
            I32(v) => v.get(index).map(|x| <i64 as From<i32>>::from(*x)),
            I64(v) => v.get(index).copied(),
            U16(v) => v.get(index).map(|x| <i64 as From<u16>>::from(*x)),
            U32(v) => v.get(index).map(|x| <i64 as From<u32>>::from(*x)),
            U64(v) => v.get(index).map(|x| *x as i64),
            F32(v) => v.get(index).map(|x| *x as i64),
            F64(v) => v.get(index).map(|x| *x as i64),
        }
    }

    /// Read the value at `index` as a 64-bit floating point number.
    /// Returns `None` when the index is out of range.
    pub fn float_at(&self, index: usize) -> Option<f64> {
        use NumericValue::*;
        match self {
            I16(v) => v.get(index).map(|x| <f64 as From<i16>>::from(*x)),
            I32(v) => v.get(index).map(|x| <f64 as From<i32>>::from(*x)),
            I64(v) => v.get(index).map(|x| *x as f64),
            U16(v) => v.get(index).map(|x| <f64 as From<u16>>::from(*x)),
            U32(v) => v.get(index).map(|x| <f64 as From<u32>>::from(*x)),
            U64(v) => v.get(index).map(|x| *x as f64),
            F32(v) => v.get(index).map(|x| <f64 as From<f32>>::from(*x)),
            F64(v) => v.get(index).copied(),
        }
    }

    /// Convert the value at `index` into the requested numeric type,
    /// failing (with `None`) when the conversion would not preserve
    /// the value or the index is out of range.
    pub fn cast_at<T>(&self, index: usize) -> Option<T>
    where
        T: NumCast,
    {
        use NumericValue::*;
        match self {
            I16(v) => v.get(index).copied().and_then(NumCast::from),
            I32(v) => v.get(index).copied().and_then(NumCast::from),
            I64(v) => v.get(index).copied().and_then(NumCast::from),
            U16(v) => v.get(index).copied().and_then(NumCast::from),
            U32(v) => v.get(index).copied().and_then(NumCast::from),
            U64(v) => v.get(index).copied().and_then(NumCast::from),
            F32(v) => v.get(index).copied().and_then(NumCast::from),
            F64(v) => v.get(index).copied().and_then(NumCast::from),
        }
    }
}

/// A DICOM data element value, shaped by the element's VR class.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    /// A single character string.
    /// Used for the single-string representations and for
    /// multi-string representations holding exactly one value.
    Str(String),
    /// Multiple character strings.
    Strs(C<String>),
    /// An array of numeric values.
    Numeric(NumericValue),
    /// An opaque byte buffer.
    Bytes(Vec<u8>),
    /// A sequence of nested data sets.
    Sequence(Sequence),
}

impl ElementValue {
    /// The number of individual values in this payload.
    /// Byte buffers and sequences count as one value.
    pub fn multiplicity(&self) -> u32 {
        match self {
            ElementValue::Str(_) => 1,
            ElementValue::Strs(v) => v.len() as u32,
            ElementValue::Numeric(v) => v.len() as u32,
            ElementValue::Bytes(_) => 1,
            ElementValue::Sequence(_) => 1,
        }
    }
}

impl From<NumericValue> for ElementValue {
    fn from(value: NumericValue) -> Self {
        ElementValue::Numeric(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn numeric_value_from_vec() {
        let value = NumericValue::from(vec![1u16, 2, 5]);
        assert_eq!(value, NumericValue::U16(smallvec![1, 2, 5]));
        assert_eq!(value.len(), 3);
        assert!(value.matches_vr(VR::US));
        assert!(!value.matches_vr(VR::SS));
    }

    #[test]
    fn int_at_extends_and_wraps() {
        let value = NumericValue::from(vec![-5i16]);
        assert_eq!(value.int_at(0), Some(-5));
        assert_eq!(value.int_at(1), None);

        // a u64 above i64::MAX wraps, like the C marshalling
        let value = NumericValue::from(vec![u64::MAX]);
        assert_eq!(value.int_at(0), Some(-1));
    }

    #[test]
    fn cast_at_is_checked() {
        let value = NumericValue::from(vec![512u16, 90]);
        assert_eq!(value.cast_at::<u16>(0), Some(512));
        assert_eq!(value.cast_at::<u8>(0), None);
        assert_eq!(value.cast_at::<u8>(1), Some(90));

        let value = NumericValue::from(vec![-1i32]);
        assert_eq!(value.cast_at::<u32>(0), None);
        assert_eq!(value.cast_at::<i64>(0), Some(-1));
    }

    #[test]
    fn multiplicity_by_shape() {
        assert_eq!(ElementValue::Str("A".into()).multiplicity(), 1);
        assert_eq!(
            ElementValue::Strs(smallvec!["A".into(), "B".into()]).multiplicity(),
            2
        );
        assert_eq!(ElementValue::Bytes(vec![0, 1, 2, 3]).multiplicity(), 1);
    }
}
