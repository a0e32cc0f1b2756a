//! Constant field tables per category
//! Author: kartik4091
//! Created: 2025-06-05

/// A recognised metadata field and its human-readable description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
}

const fn field(name: &'static str, description: &'static str) -> FieldSpec {
    FieldSpec { name, description }
}

const GPS_TIMESTAMP_FIELDS: &[FieldSpec] = &[
    field("GPSTimeStamp", "GPS time of day"),
    field("GPSDateStamp", "GPS date"),
];

const TEMPORAL_FIELDS: &[FieldSpec] = &[
    field("DateTime", "Image modification time"),
    field("DateTimeOriginal", "Original photo capture time"),
    field("DateTimeDigitized", "Digital processing time"),
    field("CreateDate", "Creation timestamp"),
    field("ModifyDate", "Last modification time"),
];

const DEVICE_FIELDS: &[FieldSpec] = &[
    field("Make", "Camera manufacturer"),
    field("Model", "Camera model"),
    field("Software", "Processing software"),
    field("LensModel", "Lens information"),
    field("CameraSerialNumber", "Camera serial number"),
    field("BodySerialNumber", "Camera body serial number"),
    field("LensSerialNumber", "Lens serial number"),
    field("HostComputer", "Processing computer name"),
];

const USER_CONTENT_FIELDS: &[FieldSpec] = &[
    field("UserComment", "User comments"),
    field("ImageDescription", "Image description"),
    field("Artist", "Artist/Creator name"),
    field("Copyright", "Copyright information"),
    field("XPComment", "Windows comment"),
    field("XPAuthor", "Windows author"),
    field("XPKeywords", "Windows keywords"),
    field("XPSubject", "Windows subject"),
    field("Keywords", "Image keywords"),
    field("Subject", "Image subject"),
    field("Creator", "Creator information"),
    field("Rights", "Rights information"),
    field("CameraOwnerName", "Camera owner name"),
];

/// Substrings that flag a value as network information
pub const NETWORK_INDICATORS: &[&str] = &[
    "wifi",
    "ssid",
    "network",
    "bluetooth",
    "mac address",
    "ip address",
    "router",
    "access point",
];

/// Field-name fragments implying ownership or authorship
pub const OWNERSHIP_HINTS: &[&str] = &["owner", "creator", "artist", "author"];

/// Description fragments that make device information identifying
pub const DEVICE_IDENTIFIER_HINTS: &[&str] = &["serial", "computer"];

/// Named field categories with fixed lookup tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    GpsTimestamp,
    Temporal,
    Device,
    UserContent,
}

impl FieldCategory {
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            FieldCategory::GpsTimestamp => GPS_TIMESTAMP_FIELDS,
            FieldCategory::Temporal => TEMPORAL_FIELDS,
            FieldCategory::Device => DEVICE_FIELDS,
            FieldCategory::UserContent => USER_CONTENT_FIELDS,
        }
    }
}
