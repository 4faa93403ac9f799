//! Tagged binary (NBT) document tree and writer.
//!
//! The game's map data file is an NBT document: every value is prefixed
//! by a one-byte type tag, named values additionally carry a
//! length-prefixed UTF-8 name, and all scalars are big-endian. The
//! document root is a single named compound.
//!
//! The tree is built fully in memory and serialized in one recursive
//! pass. Structural invariants (homogeneous lists, unique compound
//! keys, lengths that fit their prefixes) are checked during the write
//! and surface as [`NbtError`] instead of corrupt output.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use thiserror::Error;

/// Errors raised while serializing a tag tree.
#[derive(Debug, Error)]
pub enum NbtError {
    /// A list contained elements of more than one tag type.
    #[error("list elements must all be {expected:?}, found {found:?}")]
    MixedList { expected: TagType, found: TagType },

    /// A compound contained the same key twice.
    #[error("duplicate compound key {0:?}")]
    DuplicateKey(String),

    /// The document root was not a compound tag.
    #[error("document root must be a compound, got {0:?}")]
    RootNotCompound(TagType),

    /// A tag name was too long for its 2-byte length prefix.
    #[error("name of {0} bytes exceeds the u16 length prefix")]
    NameTooLong(usize),

    /// A string payload was too long for its 2-byte length prefix.
    #[error("string of {0} bytes exceeds the u16 length prefix")]
    StringTooLong(usize),

    /// An array or list was too long for its 4-byte length prefix.
    #[error("sequence of {0} elements exceeds the i32 length prefix")]
    SequenceTooLong(usize),

    /// I/O error from the underlying byte sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// NBT tag type ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TagType {
    /// Compound terminator; never a value type.
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagType {
    /// Wire id of this tag type.
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// One node of an NBT document tree.
///
/// Compound children are kept as an ordered key/value list: the format
/// does not require any particular order, but the consumer expects the
/// conventional field order, so insertion order is preserved verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(String),
    /// Homogeneous list: declared element type plus unnamed payloads.
    List(TagType, Vec<Tag>),
    Compound(Vec<(String, Tag)>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    /// The tag type of this node.
    pub fn tag_type(&self) -> TagType {
        match self {
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::String(_) => TagType::String,
            Tag::List(..) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
            Tag::IntArray(_) => TagType::IntArray,
            Tag::LongArray(_) => TagType::LongArray,
        }
    }
}

/// Serialize a document to bytes: one named compound root.
///
/// # Errors
///
/// Returns an error if `root` is not a compound or any structural
/// invariant fails during the write. The returned buffer is only
/// produced for a fully valid document.
pub fn encode_document(root_name: &str, root: &Tag) -> Result<Vec<u8>, NbtError> {
    if root.tag_type() != TagType::Compound {
        return Err(NbtError::RootNotCompound(root.tag_type()));
    }
    let mut buf = Vec::new();
    write_named(&mut buf, root_name, root)?;
    Ok(buf)
}

/// Write one named tag: type byte, length-prefixed name, payload.
pub fn write_named<W: Write>(writer: &mut W, name: &str, tag: &Tag) -> Result<(), NbtError> {
    writer.write_u8(tag.tag_type().id())?;
    write_name(writer, name)?;
    write_payload(writer, tag)
}

fn write_name<W: Write>(writer: &mut W, name: &str) -> Result<(), NbtError> {
    let len = u16::try_from(name.len()).map_err(|_| NbtError::NameTooLong(name.len()))?;
    writer.write_u16::<BigEndian>(len)?;
    writer.write_all(name.as_bytes())?;
    Ok(())
}

fn write_payload<W: Write>(writer: &mut W, tag: &Tag) -> Result<(), NbtError> {
    match tag {
        Tag::Byte(v) => writer.write_i8(*v)?,
        Tag::Short(v) => writer.write_i16::<BigEndian>(*v)?,
        Tag::Int(v) => writer.write_i32::<BigEndian>(*v)?,
        Tag::Long(v) => writer.write_i64::<BigEndian>(*v)?,
        Tag::Float(v) => writer.write_f32::<BigEndian>(*v)?,
        Tag::Double(v) => writer.write_f64::<BigEndian>(*v)?,
        Tag::ByteArray(bytes) => {
            writer.write_i32::<BigEndian>(sequence_len(bytes.len())?)?;
            writer.write_all(bytes)?;
        }
        Tag::String(s) => {
            let len = u16::try_from(s.len()).map_err(|_| NbtError::StringTooLong(s.len()))?;
            writer.write_u16::<BigEndian>(len)?;
            writer.write_all(s.as_bytes())?;
        }
        Tag::List(element, items) => {
            for item in items {
                if item.tag_type() != *element {
                    return Err(NbtError::MixedList {
                        expected: *element,
                        found: item.tag_type(),
                    });
                }
            }
            writer.write_u8(element.id())?;
            writer.write_i32::<BigEndian>(sequence_len(items.len())?)?;
            for item in items {
                write_payload(writer, item)?;
            }
        }
        Tag::Compound(entries) => {
            for (i, (name, _)) in entries.iter().enumerate() {
                if entries[..i].iter().any(|(seen, _)| seen == name) {
                    return Err(NbtError::DuplicateKey(name.clone()));
                }
            }
            for (name, child) in entries {
                write_named(writer, name, child)?;
            }
            writer.write_u8(TagType::End.id())?;
        }
        Tag::IntArray(values) => {
            writer.write_i32::<BigEndian>(sequence_len(values.len())?)?;
            for v in values {
                writer.write_i32::<BigEndian>(*v)?;
            }
        }
        Tag::LongArray(values) => {
            writer.write_i32::<BigEndian>(sequence_len(values.len())?)?;
            for v in values {
                writer.write_i64::<BigEndian>(*v)?;
            }
        }
    }
    Ok(())
}

fn sequence_len(len: usize) -> Result<i32, NbtError> {
    i32::try_from(len).map_err(|_| NbtError::SequenceTooLong(len))
}
