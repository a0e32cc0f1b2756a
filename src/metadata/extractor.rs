//! Metadata extraction from raw image bytes
//! Author: kartik4091
//! Created: 2025-06-05

use std::io::Cursor;

use exif::{Context, In, Tag, Value};
use image::{ColorType, ImageDecoder, ImageFormat, ImageReader};
use tracing::{debug, instrument, warn};

use super::container;
use super::tags::{self, TextEncoding};
use crate::config::AnalyzerConfig;
use crate::error::{Error, Result};
use crate::types::{ExtractedMetadata, MetadataMap, MetadataValue, GPS_INFO_KEY};

/// Character-code prefix length of the UserComment tag
const USER_COMMENT_PREFIX: usize = 8;

/// Parses an image container and its embedded tag data
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    max_image_bytes: usize,
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl MetadataExtractor {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            max_image_bytes: config.max_image_bytes,
        }
    }

    /// Extracts tag data, container info, format, mode and dimensions.
    ///
    /// Fails only when the bytes are not a decodable image container. An
    /// image without any embedded tags yields an empty mapping.
    #[instrument(skip(self, data), fields(len = data.len()))]
    pub fn extract(&self, data: &[u8]) -> Result<ExtractedMetadata> {
        self.validate_limits(data)?;

        let (format, mode, size) = probe_container(data)?;
        let exif = read_tag_data(data);
        let info = container::scan_info(data);

        debug!(
            %format,
            %mode,
            exif_fields = exif.len(),
            info_fields = info.len(),
            "Metadata extracted"
        );

        Ok(ExtractedMetadata { exif, info, format, mode, size })
    }

    fn validate_limits(&self, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::extraction_msg("empty input"));
        }
        if data.len() > self.max_image_bytes {
            return Err(Error::ResourceLimit(format!(
                "Image size {} exceeds limit {}",
                data.len(),
                self.max_image_bytes
            )));
        }
        Ok(())
    }
}

/// Identifies the container and reads its header: format, mode, (width, height).
fn probe_container(data: &[u8]) -> Result<(String, String, (u32, u32))> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(Error::extraction)?;
    let format = reader
        .format()
        .ok_or_else(|| Error::extraction_msg("cannot identify image file"))?;
    let decoder = reader.into_decoder().map_err(Error::extraction)?;

    Ok((
        format_name(format),
        color_mode(decoder.color_type()),
        decoder.dimensions(),
    ))
}

fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        ImageFormat::WebP => "WEBP".to_string(),
        ImageFormat::Tiff => "TIFF".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        other => format!("{:?}", other).to_uppercase(),
    }
}

fn color_mode(color: ColorType) -> String {
    let mode = match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "I;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGB;F",
        ColorType::Rgba32F => "RGBA;F",
        other => return format!("{:?}", other),
    };
    mode.to_string()
}

/// Reads the embedded tag block. Missing or unreadable tag data is not an error.
fn read_tag_data(data: &[u8]) -> MetadataMap {
    let mut cursor = Cursor::new(data);
    match exif::Reader::new().read_from_container(&mut cursor) {
        Ok(parsed) => map_fields(parsed.fields(), parsed.little_endian()),
        Err(exif::Error::NotFound(_)) => {
            debug!("No embedded tag data");
            MetadataMap::new()
        }
        Err(e) => {
            warn!("Ignoring malformed tag data: {}", e);
            MetadataMap::new()
        }
    }
}

/// `little_endian` is the byte order of the TIFF header the fields came from.
fn map_fields<'a>(fields: impl Iterator<Item = &'a exif::Field>, little_endian: bool) -> MetadataMap {
    let mut top = MetadataMap::new();
    let mut gps = MetadataMap::new();

    for field in fields {
        if field.ifd_num != In::PRIMARY || tags::is_pointer(field.tag) {
            continue;
        }
        let name = tags::tag_name(field.tag);
        let value = convert_value(field.tag, &field.value, little_endian);
        if field.tag.context() == Context::Gps {
            gps.insert(name, value);
        } else {
            top.insert(name, value);
        }
    }

    if !gps.is_empty() {
        top.insert(GPS_INFO_KEY.to_string(), MetadataValue::Mapping(gps));
    }
    top
}

#[allow(unreachable_patterns)]
fn convert_value(tag: Tag, value: &Value, little_endian: bool) -> MetadataValue {
    match value {
        Value::Ascii(parts) => {
            let texts: Vec<String> = parts.iter().map(|p| clean_text(&String::from_utf8_lossy(p))).collect();
            MetadataValue::Text(texts.join(" "))
        }
        Value::Byte(bytes) if tags::encoding(tag) == TextEncoding::Utf16Le => {
            MetadataValue::Text(decode_utf16(bytes, false))
        }
        Value::Byte(bytes) => collapse(bytes.iter().map(|&b| MetadataValue::Integer(b.into()))),
        Value::Short(v) => collapse(v.iter().map(|&x| MetadataValue::Integer(x.into()))),
        Value::Long(v) => collapse(v.iter().map(|&x| MetadataValue::Integer(x.into()))),
        Value::SByte(v) => collapse(v.iter().map(|&x| MetadataValue::Integer(x.into()))),
        Value::SShort(v) => collapse(v.iter().map(|&x| MetadataValue::Integer(x.into()))),
        Value::SLong(v) => collapse(v.iter().map(|&x| MetadataValue::Integer(x.into()))),
        Value::Rational(v) => collapse(v.iter().map(|r| rational(r.num.into(), r.denom.into()))),
        Value::SRational(v) => collapse(v.iter().map(|r| rational(r.num.into(), r.denom.into()))),
        Value::Float(v) => collapse(v.iter().map(|&x| MetadataValue::Float(x.into()))),
        Value::Double(v) => collapse(v.iter().map(|&x| MetadataValue::Float(x))),
        Value::Undefined(bytes, _) if tag == Tag::UserComment => {
            MetadataValue::Text(decode_user_comment(bytes, little_endian))
        }
        Value::Undefined(bytes, _) if tags::encoding(tag) == TextEncoding::Utf16Le => {
            MetadataValue::Text(decode_utf16(bytes, false))
        }
        Value::Undefined(bytes, _) => MetadataValue::Text(blob_text(bytes)),
        Value::Unknown(type_id, count, _) => {
            MetadataValue::Text(format!("<unknown type {} x{}>", type_id, count))
        }
        other => MetadataValue::Text(format!("{:?}", other)),
    }
}

/// Single-element lists become scalars
fn collapse(values: impl Iterator<Item = MetadataValue>) -> MetadataValue {
    let mut items: Vec<MetadataValue> = values.collect();
    if items.len() == 1 {
        items.remove(0)
    } else {
        MetadataValue::Sequence(items)
    }
}

/// A zero denominator is kept as text so numeric conversion fails cleanly later.
fn rational(num: i64, denom: i64) -> MetadataValue {
    if denom == 0 {
        MetadataValue::Text(format!("{}/{}", num, denom))
    } else {
        MetadataValue::Float(num as f64 / denom as f64)
    }
}

fn clean_text(text: &str) -> String {
    text.trim_end_matches('\0').trim_end().to_string()
}

fn decode_utf16(bytes: &[u8], big_endian: bool) -> String {
    let units = bytes.chunks_exact(2).map(|pair| {
        if big_endian {
            u16::from_be_bytes([pair[0], pair[1]])
        } else {
            u16::from_le_bytes([pair[0], pair[1]])
        }
    });
    let text: String = char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    clean_text(&text)
}

/// UserComment starts with an 8-byte character code (ASCII, UNICODE, JIS or undefined).
fn decode_user_comment(bytes: &[u8], little_endian: bool) -> String {
    if bytes.len() < USER_COMMENT_PREFIX {
        return blob_text(bytes);
    }
    let (code, body) = bytes.split_at(USER_COMMENT_PREFIX);
    if code.starts_with(b"UNICODE") {
        decode_utf16(body, !little_endian)
    } else {
        clean_text(&String::from_utf8_lossy(body))
    }
}

fn blob_text(bytes: &[u8]) -> String {
    let trimmed = match bytes.iter().rposition(|&b| b != 0) {
        Some(last) => &bytes[..=last],
        None => return String::new(),
    };
    let printable = trimmed
        .iter()
        .all(|&b| b.is_ascii_graphic() || b.is_ascii_whitespace());
    match std::str::from_utf8(trimmed) {
        Ok(text) if printable => text.trim_end().to_string(),
        _ => format!("<{} bytes>", bytes.len()),
    }
}
