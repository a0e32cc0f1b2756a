//! Tag-name resolution for embedded tag data
//! Author: kartik4091
//! Created: 2025-06-05
//!
//! Numeric tag identifiers are given friendly names before the analyzers see
//! them. The `exif` crate knows the standard Exif 2.3 names; the table below
//! adds vendor and DNG tags it leaves unnamed (Windows XP* tags, HostComputer,
//! ProcessingSoftware, CameraSerialNumber).

use exif::{Context, Tag};

/// How the raw bytes of a tag should be decoded into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// Plain bytes, decoded as ASCII/UTF-8 when printable
    Raw,
    /// UTF-16 little-endian, NUL terminated (Windows XP* tags)
    Utf16Le,
}

/// Supplementary tag description
#[derive(Debug, Clone, Copy)]
pub struct TagEntry {
    pub context: Context,
    pub number: u16,
    pub name: &'static str,
    pub encoding: TextEncoding,
}

const fn entry(context: Context, number: u16, name: &'static str) -> TagEntry {
    TagEntry { context, number, name, encoding: TextEncoding::Raw }
}

const fn utf16(number: u16, name: &'static str) -> TagEntry {
    TagEntry { context: Context::Tiff, number, name, encoding: TextEncoding::Utf16Le }
}

pub const SUPPLEMENTARY_TAGS: &[TagEntry] = &[
    entry(Context::Tiff, 0x000b, "ProcessingSoftware"),
    entry(Context::Tiff, 0x013c, "HostComputer"),
    entry(Context::Tiff, 0xc62f, "CameraSerialNumber"),
    utf16(0x9c9b, "XPTitle"),
    utf16(0x9c9c, "XPComment"),
    utf16(0x9c9d, "XPAuthor"),
    utf16(0x9c9e, "XPKeywords"),
    utf16(0x9c9f, "XPSubject"),
    entry(Context::Exif, 0xa430, "CameraOwnerName"),
    entry(Context::Exif, 0xa431, "BodySerialNumber"),
    entry(Context::Exif, 0xa434, "LensModel"),
    entry(Context::Exif, 0xa435, "LensSerialNumber"),
];

pub fn lookup(tag: Tag) -> Option<&'static TagEntry> {
    SUPPLEMENTARY_TAGS
        .iter()
        .find(|e| e.context == tag.context() && e.number == tag.number())
}

/// Friendly name of a tag; unknown tags fall back to their decimal number.
pub fn tag_name(tag: Tag) -> String {
    if let Some(entry) = lookup(tag) {
        return entry.name.to_string();
    }
    if tag.description().is_some() {
        tag.to_string()
    } else {
        tag.number().to_string()
    }
}

pub fn encoding(tag: Tag) -> TextEncoding {
    lookup(tag).map_or(TextEncoding::Raw, |e| e.encoding)
}

/// IFD pointer tags only locate sub-directories and carry no information
pub fn is_pointer(tag: Tag) -> bool {
    tag == Tag::ExifIFDPointer || tag == Tag::GPSInfoIFDPointer || tag == Tag::InteropIFDPointer
}
