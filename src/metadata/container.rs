//! Container-level info scanner (JPEG segments, PNG chunks)
//! Author: kartik4091
//! Created: 2025-06-06
//!
//! Collects key/values stored by the container itself rather than in the
//! embedded tag block: JFIF headers, XMP packets, JPEG comments and PNG text
//! chunks. Truncated or malformed structures end the scan early.

use std::io::Read;

use flate2::read::ZlibDecoder;
use tracing::debug;

use crate::types::{MetadataMap, MetadataValue};

const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";
const XMP_HEADER: &[u8] = b"http://ns.adobe.com/xap/1.0/\0";

/// Upper bound for inflated PNG text chunks
const MAX_INFLATED_TEXT: u64 = 1024 * 1024;

// JPEG markers
const SOI: u8 = 0xD8;
const EOI: u8 = 0xD9;
const SOS: u8 = 0xDA;
const APP0: u8 = 0xE0;
const APP1: u8 = 0xE1;
const APP14: u8 = 0xEE;
const COM: u8 = 0xFE;

/// Scans container-level info. Unknown containers yield an empty mapping.
pub fn scan_info(data: &[u8]) -> MetadataMap {
    let mut info = MetadataMap::new();
    if data.len() >= 2 && data[0] == 0xFF && data[1] == SOI {
        scan_jpeg(data, &mut info);
    } else if data.starts_with(PNG_SIGNATURE) {
        scan_png(data, &mut info);
    }
    info
}

fn scan_jpeg(data: &[u8], info: &mut MetadataMap) {
    let mut pos = 2;
    while pos + 4 <= data.len() {
        if data[pos] != 0xFF {
            debug!(pos, "JPEG segment scan lost sync");
            break;
        }
        let marker = data[pos + 1];
        match marker {
            0xFF => {
                pos += 1;
                continue;
            }
            SOS | EOI => break,
            0x01 | 0xD0..=0xD7 => {
                pos += 2;
                continue;
            }
            _ => {}
        }

        let length = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        if length < 2 {
            break;
        }
        let end = pos + 2 + length;
        let Some(payload) = data.get(pos + 4..end) else {
            debug!(pos, length, "Truncated JPEG segment");
            break;
        };

        match marker {
            APP0 => read_jfif(payload, info),
            APP1 if payload.starts_with(XMP_HEADER) => {
                let packet = String::from_utf8_lossy(&payload[XMP_HEADER.len()..]);
                info.insert("xmp".into(), MetadataValue::text(packet.trim_end_matches('\0')));
            }
            APP14 if payload.starts_with(b"Adobe") && payload.len() >= 12 => {
                let version = u16::from_be_bytes([payload[5], payload[6]]);
                info.insert("adobe".into(), MetadataValue::Integer(version.into()));
                info.insert("adobe_transform".into(), MetadataValue::Integer(payload[11].into()));
            }
            COM => {
                let comment = String::from_utf8_lossy(payload);
                info.insert("comment".into(), MetadataValue::text(comment.trim_end_matches('\0')));
            }
            _ => {}
        }
        pos = end;
    }
}

fn read_jfif(payload: &[u8], info: &mut MetadataMap) {
    if !payload.starts_with(b"JFIF\0") || payload.len() < 12 {
        return;
    }
    let (major, minor) = (payload[5] as i64, payload[6] as i64);
    let unit = payload[7] as i64;
    let x_density = u16::from_be_bytes([payload[8], payload[9]]) as i64;
    let y_density = u16::from_be_bytes([payload[10], payload[11]]) as i64;

    info.insert("jfif".into(), MetadataValue::Integer(major << 8 | minor));
    info.insert("jfif_version".into(), vec![major, minor].into());
    info.insert("jfif_unit".into(), MetadataValue::Integer(unit));
    info.insert("jfif_density".into(), vec![x_density, y_density].into());
    if unit == 1 {
        info.insert("dpi".into(), vec![x_density, y_density].into());
    }
}

fn scan_png(data: &[u8], info: &mut MetadataMap) {
    let mut pos = PNG_SIGNATURE.len();
    while pos + 8 <= data.len() {
        let length = u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]) as usize;
        let kind = &data[pos + 4..pos + 8];
        let start = pos + 8;
        let Some(chunk) = start.checked_add(length).and_then(|end| data.get(start..end)) else {
            debug!(pos, length, "Truncated PNG chunk");
            break;
        };

        match kind {
            b"tEXt" => {
                if let Some((key, text)) = split_keyword(chunk) {
                    info.insert(key, MetadataValue::Text(latin1(text)));
                }
            }
            b"zTXt" => {
                if let Some((key, rest)) = split_keyword(chunk) {
                    // rest[0] is the compression method, always zlib
                    if let Some(text) = rest.get(1..).and_then(inflate) {
                        info.insert(key, MetadataValue::Text(latin1(&text)));
                    }
                }
            }
            b"iTXt" => read_itxt(chunk, info),
            b"pHYs" if chunk.len() >= 9 && chunk[8] == 1 => {
                let x = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as f64;
                let y = u32::from_be_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]) as f64;
                info.insert("dpi".into(), vec![x * 0.0254, y * 0.0254].into());
            }
            b"gAMA" if chunk.len() >= 4 => {
                let gamma = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                info.insert("gamma".into(), MetadataValue::Float(gamma as f64 / 100_000.0));
            }
            b"IEND" => break,
            _ => {}
        }
        // chunk data is followed by a 4-byte CRC
        pos = start + length + 4;
    }
}

/// International text: keyword\0 flag method language\0 translated\0 text
fn read_itxt(chunk: &[u8], info: &mut MetadataMap) {
    let Some((key, rest)) = split_keyword(chunk) else {
        return;
    };
    if rest.len() < 2 {
        return;
    }
    let compressed = rest[0] == 1;
    let mut fields = rest[2..].splitn(3, |&b| b == 0);
    let (Some(_language), Some(_translated), Some(text)) = (fields.next(), fields.next(), fields.next()) else {
        return;
    };
    let text = if compressed {
        match inflate(text) {
            Some(inflated) => inflated,
            None => return,
        }
    } else {
        text.to_vec()
    };
    info.insert(key, MetadataValue::Text(String::from_utf8_lossy(&text).into_owned()));
}

fn split_keyword(chunk: &[u8]) -> Option<(String, &[u8])> {
    let nul = chunk.iter().position(|&b| b == 0)?;
    if nul == 0 {
        return None;
    }
    Some((latin1(&chunk[..nul]), &chunk[nul + 1..]))
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn inflate(compressed: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    ZlibDecoder::new(compressed)
        .take(MAX_INFLATED_TEXT)
        .read_to_end(&mut out)
        .ok()?;
    Some(out)
}
