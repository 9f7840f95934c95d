//! The DICOM data element: a polymorphic, validated value cell
//! identified by an attribute tag.

use smallvec::smallvec;
use snafu::{ensure, OptionExt};

use crate::dictionary::{DataDictionary, DictionaryEntry};
use crate::error::{
    AlreadyAssignedSnafu, BadNumericLengthSnafu, CapacityExceededSnafu, IncompatibleVrSnafu,
    IndexOutOfRangeSnafu, NarrowConvertSnafu, NoValuesSnafu, NotAssignedSnafu,
    NumericTypeMismatchSnafu, Result, UnknownTagSnafu,
};
use crate::header::{ElementNumber, GroupNumber, Tag, VrClass, VR};
use crate::sequence::Sequence;
use crate::value::{ElementValue, NumericValue, C};

/// The DICOM value separator for multi-valued string attributes.
const VALUE_SEPARATOR: char = '\\';

/// Round a byte length up to the next even number,
/// as element values are always encoded with even lengths.
fn even(length: u32) -> u32 {
    length + (length & 1)
}

/// A data element, the unit entry of a data set.
///
/// An element is created unassigned, with its value representation fixed
/// from a data dictionary, and is populated exactly once through the
/// setter matching its VR class. Every setter validates before storing:
/// on failure the element is left exactly as it was.
///
/// The byte length of an element is recorded once and never overwritten:
/// an element created with a non-zero length (from a parsed element
/// header) keeps that length even when a later value assignment computes
/// a different one, since the encoded length of compound elements
/// depends on the coding in use.
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    tag: Tag,
    vr: VR,
    length: u32,
    value: Option<ElementValue>,
}

impl DataElement {
    /// Create a new unassigned data element.
    ///
    /// The value representation is the canonical one for `tag` according
    /// to `dict`; creation fails when the dictionary has no entry for the
    /// tag. `length` is the provisional byte length from the element
    /// header, 0 when the element is built from scratch; odd lengths are
    /// rounded up by one.
    pub fn new<D>(dict: &D, tag: Tag, length: u32) -> Result<Self>
    where
        D: DataDictionary,
    {
        let entry = dict.by_tag(tag).context(UnknownTagSnafu { tag })?;
        Ok(DataElement {
            tag,
            vr: entry.vr(),
            length: even(length),
            value: None,
        })
    }

    /// The element's attribute tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The group number of the element's tag.
    pub fn group_number(&self) -> GroupNumber {
        self.tag.group()
    }

    /// The element number of the element's tag.
    pub fn element_number(&self) -> ElementNumber {
        self.tag.element()
    }

    /// The element's value representation.
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// The recorded byte length of the encoded value. Always even.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The value multiplicity: the number of values the element holds,
    /// 0 while unassigned.
    pub fn multiplicity(&self) -> u32 {
        self.value.as_ref().map_or(0, ElementValue::multiplicity)
    }

    /// Whether the element holds more than one value.
    pub fn is_multivalued(&self) -> bool {
        self.multiplicity() > 1
    }

    /// Whether the element has been assigned a value.
    pub fn is_assigned(&self) -> bool {
        self.value.is_some()
    }

    /// The element's value, if one was assigned.
    pub fn value(&self) -> Option<&ElementValue> {
        self.value.as_ref()
    }

    // --- value setters ---

    /// Assign a character string value.
    ///
    /// Requires a string VR. On the multi-string representations the
    /// value is split on the `\` separator; a value without separators
    /// is stored in the single form.
    pub fn set_string(&mut self, value: impl Into<String>) -> Result<()> {
        self.check_not_assigned()?;
        self.check_string()?;
        let value = value.into();
        if self.vr.class() == VrClass::MultiStr {
            let values: C<String> = value.split(VALUE_SEPARATOR).map(String::from).collect();
            self.commit_strings(values)
        } else {
            self.commit_strings(smallvec![value])
        }
    }

    /// Assign multiple character string values.
    ///
    /// A single value collapses to the single-string form and is
    /// accepted on every string VR; more than one value requires a
    /// multi-string VR. Values are stored verbatim, without separator
    /// splitting.
    pub fn set_string_multi(&mut self, values: Vec<String>) -> Result<()> {
        self.check_not_assigned()?;
        self.check_string()?;
        ensure!(!values.is_empty(), NoValuesSnafu { tag: self.tag });
        if values.len() > 1 {
            ensure!(
                self.vr.class() == VrClass::MultiStr,
                IncompatibleVrSnafu {
                    tag: self.tag,
                    vr: self.vr,
                    requested: "multi-valued string",
                }
            );
        }
        self.commit_strings(values.into())
    }

    /// Assign a single integer value, narrowing to the scalar type
    /// of the element's VR. Only the low bytes are kept when the value
    /// does not fit the narrower type.
    pub fn set_integer(&mut self, value: i64) -> Result<()> {
        self.check_not_assigned()?;
        let values = match self.vr {
            VR::SS => NumericValue::I16(smallvec![value as i16]),
            VR::SL => NumericValue::I32(smallvec![value as i32]),
            VR::SV => NumericValue::I64(smallvec![value]),
            VR::US => NumericValue::U16(smallvec![value as u16]),
            VR::UL => NumericValue::U32(smallvec![value as u32]),
            VR::UV => NumericValue::U64(smallvec![value as u64]),
            _ => {
                return IncompatibleVrSnafu {
                    tag: self.tag,
                    vr: self.vr,
                    requested: "integer",
                }
                .fail()
            }
        };
        self.commit_numeric(values)
    }

    /// Assign a single floating point value.
    /// Requires one of the float VRs (`FL` or `FD`).
    pub fn set_double(&mut self, value: f64) -> Result<()> {
        self.check_not_assigned()?;
        let values = match self.vr {
            VR::FL => NumericValue::F32(smallvec![value as f32]),
            VR::FD => NumericValue::F64(smallvec![value]),
            _ => {
                return IncompatibleVrSnafu {
                    tag: self.tag,
                    vr: self.vr,
                    requested: "floating point",
                }
                .fail()
            }
        };
        self.commit_numeric(values)
    }

    /// Assign an array of numeric values.
    ///
    /// Requires a numeric VR; the scalar type of the array must be the
    /// native type of the VR (e.g. `u16` for `US`).
    pub fn set_numeric_multi(&mut self, values: impl Into<NumericValue>) -> Result<()> {
        self.check_not_assigned()?;
        self.check_class(VrClass::Numeric, "numeric")?;
        let values = values.into();
        ensure!(!values.is_empty(), NoValuesSnafu { tag: self.tag });
        ensure!(
            values.matches_vr(self.vr),
            NumericTypeMismatchSnafu {
                tag: self.tag,
                vr: self.vr,
                got: values.scalar_name(),
            }
        );
        self.commit_numeric(values)
    }

    /// Assign a byte buffer value. Requires a binary VR.
    pub fn set_binary(&mut self, data: impl Into<Vec<u8>>) -> Result<()> {
        self.check_not_assigned()?;
        self.check_class(VrClass::Bytes, "binary")?;
        let data = data.into();
        let length = self.effective_length(data.len() as u32);
        self.value = Some(ElementValue::Bytes(data));
        self.length = length;
        Ok(())
    }

    /// Assign a sequence value, transferring ownership of the sequence.
    ///
    /// Requires the `SQ` representation. The derived byte length is the
    /// sum over all items of the lengths of their elements.
    pub fn set_sequence(&mut self, sequence: Sequence) -> Result<()> {
        self.check_not_assigned()?;
        self.check_class(VrClass::Seq, "sequence")?;
        let computed: u32 = sequence
            .iter()
            .map(|item| item.iter().map(DataElement::length).sum::<u32>())
            .sum();
        let length = self.effective_length(computed);
        self.value = Some(ElementValue::Sequence(sequence));
        self.length = length;
        Ok(())
    }

    // --- value getters ---

    /// Read the string value at the given index.
    pub fn string(&self, index: u32) -> Result<&str> {
        let value = self.assigned_value()?;
        self.check_string()?;
        self.check_index(index)?;
        match value {
            ElementValue::Str(s) => Ok(s.as_str()),
            ElementValue::Strs(v) => Ok(v[index as usize].as_str()),
            _ => IncompatibleVrSnafu {
                tag: self.tag,
                vr: self.vr,
                requested: "string",
            }
            .fail(),
        }
    }

    /// Read the integer value at the given index as an `i64`.
    ///
    /// Requires a numeric, non-float VR. Unsigned 64-bit values
    /// beyond `i64::MAX` wrap; use [`to_int`](DataElement::to_int)
    /// for a checked conversion.
    pub fn integer(&self, index: u32) -> Result<i64> {
        let value = self.numeric_value("integer")?;
        ensure!(
            !matches!(self.vr, VR::FL | VR::FD),
            IncompatibleVrSnafu {
                tag: self.tag,
                vr: self.vr,
                requested: "integer",
            }
        );
        self.check_index(index)?;
        value
            .int_at(index as usize)
            .context(IndexOutOfRangeSnafu {
                tag: self.tag,
                index,
                multiplicity: self.multiplicity(),
            })
    }

    /// Read the floating point value at the given index.
    /// Requires one of the float VRs (`FL` or `FD`).
    pub fn double(&self, index: u32) -> Result<f64> {
        let value = self.numeric_value("floating point")?;
        ensure!(
            matches!(self.vr, VR::FL | VR::FD),
            IncompatibleVrSnafu {
                tag: self.tag,
                vr: self.vr,
                requested: "floating point",
            }
        );
        self.check_index(index)?;
        value
            .float_at(index as usize)
            .context(IndexOutOfRangeSnafu {
                tag: self.tag,
                index,
                multiplicity: self.multiplicity(),
            })
    }

    /// Read the numeric value at the given index,
    /// converted to the requested type.
    /// Fails when the conversion would not preserve the value.
    pub fn to_int<T>(&self, index: u32) -> Result<T>
    where
        T: num_traits::NumCast,
    {
        let value = self.numeric_value("numeric")?;
        self.check_index(index)?;
        value.cast_at(index as usize).context(NarrowConvertSnafu {
            tag: self.tag,
            index,
        })
    }

    /// Borrow the byte buffer value. Requires a binary VR.
    pub fn binary(&self) -> Result<&[u8]> {
        let value = self.assigned_value()?;
        match value {
            ElementValue::Bytes(data) => Ok(data.as_slice()),
            _ => IncompatibleVrSnafu {
                tag: self.tag,
                vr: self.vr,
                requested: "binary",
            }
            .fail(),
        }
    }

    /// Borrow the sequence value, locking the sequence.
    pub fn sequence(&self) -> Result<&Sequence> {
        let value = self.assigned_value()?;
        match value {
            ElementValue::Sequence(sequence) => {
                sequence.lock();
                Ok(sequence)
            }
            _ => IncompatibleVrSnafu {
                tag: self.tag,
                vr: self.vr,
                requested: "sequence",
            }
            .fail(),
        }
    }

    // --- internal checks and commit helpers ---

    fn check_not_assigned(&self) -> Result<()> {
        ensure!(
            self.value.is_none(),
            AlreadyAssignedSnafu { tag: self.tag }
        );
        Ok(())
    }

    fn assigned_value(&self) -> Result<&ElementValue> {
        self.value
            .as_ref()
            .context(NotAssignedSnafu { tag: self.tag })
    }

    fn numeric_value(&self, requested: &'static str) -> Result<&NumericValue> {
        match self.assigned_value()? {
            ElementValue::Numeric(v) => Ok(v),
            _ => IncompatibleVrSnafu {
                tag: self.tag,
                vr: self.vr,
                requested,
            }
            .fail(),
        }
    }

    fn check_class(&self, wanted: VrClass, requested: &'static str) -> Result<()> {
        ensure!(
            self.vr.class() == wanted,
            IncompatibleVrSnafu {
                tag: self.tag,
                vr: self.vr,
                requested,
            }
        );
        Ok(())
    }

    fn check_string(&self) -> Result<()> {
        ensure!(
            matches!(self.vr.class(), VrClass::Str | VrClass::MultiStr),
            IncompatibleVrSnafu {
                tag: self.tag,
                vr: self.vr,
                requested: "string",
            }
        );
        Ok(())
    }

    fn check_index(&self, index: u32) -> Result<()> {
        let multiplicity = self.multiplicity();
        ensure!(
            index < multiplicity,
            IndexOutOfRangeSnafu {
                tag: self.tag,
                index,
                multiplicity,
            }
        );
        Ok(())
    }

    /// The length the element will record for a value whose computed
    /// byte length is `computed`: the already recorded length when one
    /// exists, the even-rounded computed length otherwise.
    fn effective_length(&self, computed: u32) -> u32 {
        if self.length != 0 {
            self.length
        } else {
            even(computed)
        }
    }

    fn commit_strings(&mut self, mut values: C<String>) -> Result<()> {
        if let Some(capacity) = self.vr.capacity() {
            for v in &values {
                ensure!(
                    v.len() as u32 <= capacity,
                    CapacityExceededSnafu {
                        tag: self.tag,
                        vr: self.vr,
                        capacity,
                    }
                );
            }
        }
        let byte_len =
            values.iter().map(String::len).sum::<usize>() + values.len().saturating_sub(1);
        let length = self.effective_length(byte_len as u32);
        self.value = Some(if values.len() == 1 {
            ElementValue::Str(values.swap_remove(0))
        } else {
            ElementValue::Strs(values)
        });
        self.length = length;
        Ok(())
    }

    fn commit_numeric(&mut self, values: NumericValue) -> Result<()> {
        let multiplicity = values.len() as u32;
        let length = self.effective_length(multiplicity * self.vr.size());
        ensure!(
            length == multiplicity * self.vr.size(),
            BadNumericLengthSnafu {
                tag: self.tag,
                vr: self.vr,
                length,
                multiplicity,
            }
        );
        self.value = Some(ElementValue::Numeric(values));
        self.length = length;
        Ok(())
    }
}
