//! Human-readable dumping of data elements and data sets.
//!
//! Output is written to any [`io::Write`] destination. The format is
//! designed for inspection, not round-tripping: one line per element,
//! with nested sequences indented and itemized.

use std::io::{self, Write};

use itertools::Itertools;
use tracing::warn;

use crate::dataset::DataSet;
use crate::dictionary::{DataDictionary, DictionaryEntry};
use crate::element::DataElement;
use crate::header::{VrClass, VR};

/// Write a one-line human readable form of a data element:
/// `(GGGG,EEEE) Keyword | VR | length | value(s)`.
///
/// The keyword is looked up in `dict` and omitted for private tags.
/// Multi-values are bracketed and comma-separated; binary values are
/// rendered as a byte-count placeholder; sequence items are printed
/// recursively, one indentation level deeper.
pub fn dump_element<W, D>(to: &mut W, dict: &D, element: &DataElement, depth: u32) -> io::Result<()>
where
    W: Write,
    D: DataDictionary,
{
    let indent = "  ".repeat(depth as usize);
    let tag = element.tag();
    let keyword = if tag.is_private() {
        None
    } else {
        dict.by_tag(tag).map(DictionaryEntry::keyword)
    };
    match keyword {
        Some(keyword) => write!(to, "{}{} {} | {}", indent, tag, keyword, element.vr())?,
        None => write!(to, "{} {} | {}", indent, tag, element.vr())?,
    }

    if element.vr() == VR::SQ {
        if let Ok(sequence) = element.sequence() {
            if sequence.is_empty() {
                writeln!(to, " | []")?;
            } else {
                writeln!(to, " | [")?;
                let item_indent = "  ".repeat(depth as usize + 1);
                for (i, item) in sequence.iter().enumerate() {
                    writeln!(to, "{}---Item #{}---", item_indent, i + 1)?;
                    dump_dataset(to, dict, item, depth + 1)?;
                }
                writeln!(to, "{}]", indent)?;
            }
        } else {
            writeln!(to, " | {} |", element.length())?;
        }
        return Ok(());
    }

    write!(to, " | {} | ", element.length())?;
    let rendered = (0..element.multiplicity())
        .map(|i| render_value(element, i))
        .join(", ");
    if element.is_multivalued() {
        writeln!(to, "[{}]", rendered)
    } else {
        writeln!(to, "{}", rendered)
    }
}

/// Write every element of the data set in ascending tag order.
pub fn dump_dataset<W, D>(to: &mut W, dict: &D, dataset: &DataSet, depth: u32) -> io::Result<()>
where
    W: Write,
    D: DataDictionary,
{
    for tag in dataset.sorted_tags() {
        if let Some(element) = dataset.get(tag) {
            dump_element(to, dict, element, depth)?;
        }
    }
    Ok(())
}

fn render_value(element: &DataElement, index: u32) -> String {
    match element.vr().class() {
        VrClass::Numeric => match element.vr() {
            VR::FL | VR::FD => element
                .double(index)
                .map(|v| v.to_string())
                .unwrap_or_default(),
            VR::UV => element
                .to_int::<u64>(index)
                .map(|v| v.to_string())
                .unwrap_or_default(),
            _ => element
                .integer(index)
                .map(|v| v.to_string())
                .unwrap_or_default(),
        },
        VrClass::Str | VrClass::MultiStr => element
            .string(index)
            .map(String::from)
            .unwrap_or_default(),
        VrClass::Bytes => format!("<{} bytes>", element.length()),
        VrClass::Seq => {
            warn!("unexpected value representation {}", element.vr());
            String::new()
        }
    }
}
