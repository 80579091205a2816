//! The resolved color record handed to renderers and front-ends.

use crate::color::{rgb_to_hsv, Hsv, Rgb};
use crate::error::WheelError;
use crate::name::display_name;
use serde::{Deserialize, Serialize};

/// A catalog entry materialized on demand.
///
/// `hex` is always derived from `rgb`, so the two never disagree. Deserialized
/// records must carry a hex that parses to the same `rgb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct ColorRecord {
    name: String,
    hex: String,
    rgb: Rgb,
}

#[derive(Deserialize)]
struct RecordFields {
    name: String,
    hex: String,
    rgb: Rgb,
}

impl TryFrom<RecordFields> for ColorRecord {
    type Error = WheelError;

    fn try_from(fields: RecordFields) -> Result<Self, Self::Error> {
        let parsed = Rgb::from_hex(&fields.hex)?;
        if parsed != fields.rgb {
            return Err(WheelError::InvalidColor(format!(
                "hex {} does not match rgb {:?} for '{}'",
                fields.hex,
                <[u8; 3]>::from(fields.rgb),
                fields.name
            )));
        }
        Ok(ColorRecord::new(fields.name, fields.rgb))
    }
}

impl ColorRecord {
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            name: name.into(),
            hex: rgb.to_hex(),
            rgb,
        }
    }

    /// Catalog key, e.g. `"azure_4"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Uppercase `"#RRGGBB"`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn into_name(self) -> String {
        self.name
    }

    /// "yellow_green" -> "Yellow Green".
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }

    pub fn hsv(&self) -> Hsv {
        rgb_to_hsv(self.rgb)
    }
}

/// Everything a front-end shows when describing a single color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorInfo {
    pub record: ColorRecord,
    pub display_name: String,
    /// Hue in whole degrees, saturation and value in whole percent (truncated).
    pub hsv: [u16; 3],
    /// Wheel position in degrees, if the color belongs to a principal hue family.
    pub position: Option<i32>,
    /// Principal hue the color belongs to.
    pub family: Option<String>,
}

impl ColorInfo {
    pub(crate) fn new(record: ColorRecord, position: Option<i32>, family: Option<String>) -> Self {
        let hsv = record.hsv();
        Self {
            display_name: record.display_name(),
            hsv: [hsv.h as u16, (hsv.s * 100.0) as u16, (hsv.v * 100.0) as u16],
            record,
            position,
            family,
        }
    }
}
