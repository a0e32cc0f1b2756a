//! Synthetic image fixtures with hand-built embedded tag data

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbImage};

// TIFF field types
const BYTE: u16 = 1;
const ASCII: u16 = 2;
const SHORT: u16 = 3;
const LONG: u16 = 4;
const RATIONAL: u16 = 5;
const UNDEFINED: u16 = 7;

// Sub-IFD pointer tags
const EXIF_POINTER: u16 = 0x8769;
const GPS_POINTER: u16 = 0x8825;

/// One IFD entry: tag, field type, count and little-endian payload
#[derive(Debug, Clone)]
pub struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
}

impl Entry {
    pub fn ascii(tag: u16, text: &str) -> Self {
        let mut data = text.as_bytes().to_vec();
        data.push(0);
        Self { tag, kind: ASCII, count: data.len() as u32, data }
    }

    pub fn short(tag: u16, value: u16) -> Self {
        Self { tag, kind: SHORT, count: 1, data: value.to_le_bytes().to_vec() }
    }

    pub fn bytes(tag: u16, values: &[u8]) -> Self {
        Self { tag, kind: BYTE, count: values.len() as u32, data: values.to_vec() }
    }

    pub fn rationals(tag: u16, values: &[(u32, u32)]) -> Self {
        let mut data = Vec::with_capacity(values.len() * 8);
        for (num, denom) in values {
            data.extend_from_slice(&num.to_le_bytes());
            data.extend_from_slice(&denom.to_le_bytes());
        }
        Self { tag, kind: RATIONAL, count: values.len() as u32, data }
    }

    pub fn undefined(tag: u16, bytes: &[u8]) -> Self {
        Self { tag, kind: UNDEFINED, count: bytes.len() as u32, data: bytes.to_vec() }
    }

    /// UserComment with the ASCII character-code prefix
    pub fn user_comment(text: &str) -> Self {
        let mut bytes = b"ASCII\0\0\0".to_vec();
        bytes.extend_from_slice(text.as_bytes());
        Self::undefined(0x9286, &bytes)
    }

    /// Windows XP* tag holding UTF-16LE text
    pub fn xp_text(tag: u16, text: &str) -> Self {
        let mut bytes = Vec::new();
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes.extend_from_slice(&[0, 0]);
        Self::bytes(tag, &bytes)
    }

    fn pointer(tag: u16, offset: u32) -> Self {
        Self { tag, kind: LONG, count: 1, data: offset.to_le_bytes().to_vec() }
    }
}

/// Embedded tag data split the way the TIFF structure stores it
#[derive(Debug, Clone, Default)]
pub struct TagBlock {
    pub primary: Vec<Entry>,
    pub exif: Vec<Entry>,
    pub gps: Vec<Entry>,
}

impl TagBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(mut self, entry: Entry) -> Self {
        self.primary.push(entry);
        self
    }

    pub fn exif(mut self, entry: Entry) -> Self {
        self.exif.push(entry);
        self
    }

    pub fn gps(mut self, entry: Entry) -> Self {
        self.gps.push(entry);
        self
    }

    /// GPS coordinates as whole degrees/minutes/seconds
    pub fn coordinates(self, lat: [u32; 3], lat_ref: &str, lon: [u32; 3], lon_ref: &str) -> Self {
        let dms = |v: [u32; 3]| [(v[0], 1), (v[1], 1), (v[2], 1)];
        self.gps(Entry::ascii(0x0001, lat_ref))
            .gps(Entry::rationals(0x0002, &dms(lat)))
            .gps(Entry::ascii(0x0003, lon_ref))
            .gps(Entry::rationals(0x0004, &dms(lon)))
    }

    /// Serialises a little-endian TIFF structure
    pub fn to_tiff(&self) -> Vec<u8> {
        let mut primary = self.primary.clone();
        // pointer values are patched below; sizes do not depend on them
        if !self.exif.is_empty() {
            primary.push(Entry::pointer(EXIF_POINTER, 0));
        }
        if !self.gps.is_empty() {
            primary.push(Entry::pointer(GPS_POINTER, 0));
        }

        let primary_offset = 8u32;
        let exif_offset = primary_offset + ifd_size(&primary);
        let gps_offset = exif_offset + ifd_size(&self.exif);

        for entry in primary.iter_mut() {
            match entry.tag {
                EXIF_POINTER => entry.data = exif_offset.to_le_bytes().to_vec(),
                GPS_POINTER => entry.data = gps_offset.to_le_bytes().to_vec(),
                _ => {}
            }
        }

        let mut tiff = b"II*\0".to_vec();
        tiff.extend_from_slice(&primary_offset.to_le_bytes());
        tiff.extend(write_ifd(&primary, primary_offset));
        if !self.exif.is_empty() {
            tiff.extend(write_ifd(&self.exif, exif_offset));
        }
        if !self.gps.is_empty() {
            tiff.extend(write_ifd(&self.gps, gps_offset));
        }
        tiff
    }
}

fn padded(len: usize) -> u32 {
    (len + len % 2) as u32
}

fn ifd_size(entries: &[Entry]) -> u32 {
    if entries.is_empty() {
        return 0;
    }
    let external: u32 = entries
        .iter()
        .filter(|e| e.data.len() > 4)
        .map(|e| padded(e.data.len()))
        .sum();
    2 + 12 * entries.len() as u32 + 4 + external
}

fn write_ifd(entries: &[Entry], offset: u32) -> Vec<u8> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.tag);

    let mut table = (sorted.len() as u16).to_le_bytes().to_vec();
    let mut data_area = Vec::new();
    let data_start = offset + 2 + 12 * sorted.len() as u32 + 4;

    for entry in &sorted {
        table.extend_from_slice(&entry.tag.to_le_bytes());
        table.extend_from_slice(&entry.kind.to_le_bytes());
        table.extend_from_slice(&entry.count.to_le_bytes());
        if entry.data.len() <= 4 {
            let mut inline = entry.data.clone();
            inline.resize(4, 0);
            table.extend_from_slice(&inline);
        } else {
            let at = data_start + data_area.len() as u32;
            table.extend_from_slice(&at.to_le_bytes());
            data_area.extend_from_slice(&entry.data);
            if entry.data.len() % 2 == 1 {
                data_area.push(0);
            }
        }
    }
    table.extend_from_slice(&0u32.to_le_bytes());
    table.extend(data_area);
    table
}

fn encode(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([120, 160, 200])));
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).unwrap();
    out.into_inner()
}

/// Baseline JPEG without any embedded tag data
pub fn plain_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(ImageFormat::Jpeg, width, height)
}

/// Baseline PNG without text chunks
pub fn plain_png(width: u32, height: u32) -> Vec<u8> {
    encode(ImageFormat::Png, width, height)
}

/// JPEG with the tag block spliced in as an APP1 segment right after SOI
pub fn jpeg_with_tags(tags: &TagBlock) -> Vec<u8> {
    let jpeg = plain_jpeg(16, 12);
    let tiff = tags.to_tiff();

    let mut segment = vec![0xFF, 0xE1];
    segment.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    segment.extend_from_slice(b"Exif\0\0");
    segment.extend(tiff);

    let mut out = jpeg[..2].to_vec();
    out.extend(segment);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// JPEG with a COM segment after SOI
pub fn jpeg_with_comment(comment: &str) -> Vec<u8> {
    let jpeg = plain_jpeg(8, 8);
    let mut out = jpeg[..2].to_vec();
    out.extend_from_slice(&[0xFF, 0xFE]);
    out.extend_from_slice(&((comment.len() + 2) as u16).to_be_bytes());
    out.extend_from_slice(comment.as_bytes());
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// PNG with `tEXt` chunks inserted after IHDR
pub fn png_with_text(entries: &[(&str, &str)]) -> Vec<u8> {
    let png = plain_png(8, 8);
    // signature (8) + IHDR chunk (4 + 4 + 13 + 4)
    let ihdr_end = 8 + 25;

    let mut out = png[..ihdr_end].to_vec();
    for (key, text) in entries {
        let mut payload = key.as_bytes().to_vec();
        payload.push(0);
        payload.extend_from_slice(text.as_bytes());
        out.extend(png_chunk(b"tEXt", &payload));
    }
    out.extend_from_slice(&png[ihdr_end..]);
    out
}

fn png_chunk(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut crc = flate2::Crc::new();
    crc.update(kind);
    crc.update(payload);

    let mut chunk = (payload.len() as u32).to_be_bytes().to_vec();
    chunk.extend_from_slice(kind);
    chunk.extend_from_slice(payload);
    chunk.extend_from_slice(&crc.sum().to_be_bytes());
    chunk
}

/// GPS position, body serial number and an email in the user comment
pub fn privacy_heavy_tags() -> TagBlock {
    TagBlock::new()
        .primary(Entry::ascii(0x010f, "Canon"))
        .primary(Entry::ascii(0x0110, "Canon EOS R5"))
        .primary(Entry::short(0x0112, 1))
        .exif(Entry::ascii(0x9003, "2024:05:01 18:30:00"))
        .exif(Entry::ascii(0xa431, "0123456789"))
        .exif(Entry::user_comment("contact me at jane.doe@example.com"))
        .coordinates([40, 26, 46], "N", [79, 58, 56], "W")
}
