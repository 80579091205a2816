//! The name -> color catalog.
//!
//! A catalog is built once (generated, parsed from JSON, or assembled from an
//! in-memory table) and is read-only afterwards. Keys are normalized with
//! [`crate::name::normalize`] and keep their insertion order.

use crate::color::{hsv_to_rgb, Hsv, Rgb};
use crate::error::WheelError;
use crate::name::{normalize, shade_key, BASE_SHADE, SHADE_COUNT};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// The 12 principal hues in wheel order, starting at 0 degrees.
pub const DEFAULT_PRINCIPAL_HUES: [&str; 12] = [
    "red",
    "orange",
    "yellow",
    "yellow_green",
    "green",
    "emerald",
    "cyan",
    "azure",
    "blue",
    "violet",
    "magenta",
    "crimson",
];

/// Neutral grays appended after the hue families.
pub const NEUTRALS: [(&str, Rgb); 5] = [
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("light_gray", Rgb::new(0xcc, 0xcc, 0xcc)),
    ("gray", Rgb::new(0x88, 0x88, 0x88)),
    ("dark_gray", Rgb::new(0x44, 0x44, 0x44)),
    ("black", Rgb::new(0x00, 0x00, 0x00)),
];

/// Degrees between neighbouring principal hues.
pub const HUE_STEP: i32 = 30;

/// Insertion-ordered, immutable mapping from color name to color.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(String, Rgb)>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from `(name, color)` pairs.
    ///
    /// Names are normalized. Returns `WheelError::InvalidCatalog` for an
    /// empty name or for two names that normalize to the same key.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, WheelError>
    where
        I: IntoIterator<Item = (K, Rgb)>,
        K: AsRef<str>,
    {
        let mut catalog = Catalog::default();
        for (name, rgb) in pairs {
            catalog.insert(name.as_ref(), rgb)?;
        }
        Ok(catalog)
    }

    /// Parses a JSON object of `"name": "#RRGGBB"` entries, keeping file order.
    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| WheelError::InvalidCatalog(format!("malformed JSON: {e}")))?;
        let object = value.as_object().ok_or_else(|| {
            WheelError::InvalidCatalog("expected a JSON object of name -> hex".to_string())
        })?;

        let mut catalog = Catalog::default();
        for (name, hex) in object {
            let hex = hex.as_str().ok_or_else(|| {
                WheelError::InvalidCatalog(format!("value for '{name}' is not a string"))
            })?;
            catalog.insert(name, Rgb::from_hex(hex)?)?;
        }
        tracing::debug!(entries = catalog.len(), "loaded catalog from JSON");
        Ok(catalog)
    }

    /// Generates the shaded catalog for the given principal hues.
    ///
    /// Hue `i` sits at HSV hue `i * 30`. Each gets `SHADE_COUNT` variants at
    /// full saturation with value stepping down from 1.0 by 0.2, named
    /// `<hue>_1` (lightest) to `<hue>_5` (darkest). Shade 3 is also
    /// registered under the bare hue name. The neutrals follow.
    pub fn generate<S: AsRef<str>>(hues: &[S]) -> Result<Self, WheelError> {
        let mut catalog = Catalog::default();
        for (i, hue) in hues.iter().enumerate() {
            let hue = normalize(hue.as_ref());
            for shade in 1..=SHADE_COUNT {
                let rgb = hsv_to_rgb(Hsv {
                    h: (i as i32 * HUE_STEP) as f64,
                    s: 1.0,
                    v: (SHADE_COUNT - shade + 1) as f64 / SHADE_COUNT as f64,
                });
                catalog.insert(&shade_key(&hue, shade), rgb)?;
                if shade == BASE_SHADE {
                    catalog.insert(&hue, rgb)?;
                }
            }
        }
        for (name, rgb) in NEUTRALS {
            catalog.insert(name, rgb)?;
        }
        tracing::debug!(
            hues = hues.len(),
            entries = catalog.len(),
            "generated shaded catalog"
        );
        Ok(catalog)
    }

    /// The generated catalog for [`DEFAULT_PRINCIPAL_HUES`].
    pub fn standard() -> Self {
        Self::generate(&DEFAULT_PRINCIPAL_HUES).expect("default principal hues are distinct")
    }

    fn insert(&mut self, name: &str, rgb: Rgb) -> Result<(), WheelError> {
        let key = normalize(name);
        if key.is_empty() {
            return Err(WheelError::InvalidCatalog("empty color name".to_string()));
        }
        if self.index.contains_key(&key) {
            return Err(WheelError::InvalidCatalog(format!(
                "duplicate color name '{key}'"
            )));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, rgb));
        Ok(())
    }

    /// Looks up a color by name (normalized before matching).
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.get_key(&normalize(name))
    }

    /// Looks up an already-normalized key.
    pub(crate) fn get_key(&self, key: &str) -> Option<Rgb> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Color names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, color)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> + '_ {
        self.entries.iter().map(|(name, rgb)| (name.as_str(), *rgb))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes to a pretty-printed JSON object of `"name": "#RRGGBB"`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let object: Map<String, Value> = self
            .iter()
            .map(|(name, rgb)| (name.to_string(), Value::String(rgb.to_hex())))
            .collect();
        serde_json::to_string_pretty(&Value::Object(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_hsv;

    #[test]
    fn standard_catalog_has_six_keys_per_hue_plus_neutrals() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 12 * 6 + NEUTRALS.len());
    }

    #[test]
    fn generated_entries_follow_shade_order() {
        let catalog = Catalog::standard();
        let first: Vec<&str> = catalog.names().take(7).collect();
        assert_eq!(
            first,
            ["red_1", "red_2", "red_3", "red", "red_4", "red_5", "orange_1"]
        );
        let last: Vec<&str> = catalog.names().skip(catalog.len() - 5).collect();
        assert_eq!(last, ["white", "light_gray", "gray", "dark_gray", "black"]);
    }

    #[test]
    fn bare_hue_aliases_shade_three() {
        let catalog = Catalog::standard();
        for hue in DEFAULT_PRINCIPAL_HUES {
            assert_eq!(
                catalog.get(hue),
                catalog.get(&format!("{hue}_3")),
                "{hue} should alias {hue}_3"
            );
        }
    }

    #[test]
    fn red_shades_have_expected_values() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.get("red_1").unwrap().to_hex(), "#FF0000");
        assert_eq!(catalog.get("red_2").unwrap().to_hex(), "#CC0000");
        assert_eq!(catalog.get("red_3").unwrap().to_hex(), "#990000");
        assert_eq!(catalog.get("red_4").unwrap().to_hex(), "#660000");
        assert_eq!(catalog.get("red_5").unwrap().to_hex(), "#330000");
    }

    #[test]
    fn generated_hue_matches_wheel_position() {
        let catalog = Catalog::standard();
        for (i, hue) in DEFAULT_PRINCIPAL_HUES.iter().enumerate() {
            let hsv = rgb_to_hsv(catalog.get(&format!("{hue}_1")).unwrap());
            let expected = (i as i32 * HUE_STEP) as f64;
            assert!(
                (hsv.h - expected).abs() < 1.0,
                "{hue}: hue {} vs {expected}",
                hsv.h
            );
        }
    }

    #[test]
    fn shade_value_strictly_decreases() {
        let catalog = Catalog::standard();
        for hue in DEFAULT_PRINCIPAL_HUES {
            let values: Vec<f64> = (1..=SHADE_COUNT)
                .map(|s| rgb_to_hsv(catalog.get(&shade_key(hue, s)).unwrap()).v)
                .collect();
            assert!(
                values.windows(2).all(|w| w[0] > w[1]),
                "{hue} values not decreasing: {values:?}"
            );
        }
    }

    #[test]
    fn get_normalizes_the_query() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.get("Yellow Green"), catalog.get("yellow_green"));
        assert!(catalog.contains("  LIGHT gray "));
        assert!(!catalog.contains("chartreuse"));
    }

    #[test]
    fn from_pairs_rejects_duplicates_after_normalization() {
        let result = Catalog::from_pairs([("Dark Gray", Rgb::BLACK), ("dark_gray", Rgb::WHITE)]);
        assert!(matches!(result, Err(WheelError::InvalidCatalog(_))));
    }

    #[test]
    fn from_pairs_rejects_empty_names() {
        let result = Catalog::from_pairs([("  ", Rgb::BLACK)]);
        assert!(matches!(result, Err(WheelError::InvalidCatalog(_))));
    }

    #[test]
    fn generate_rejects_duplicate_hues() {
        assert!(Catalog::generate(&["red", "Red"]).is_err());
    }

    #[test]
    fn from_json_preserves_order_and_parses_hex() {
        let catalog =
            Catalog::from_json(r##"{"zinc": "#71797E", "apple": "#8DB600", "Mid Gray": "808080"}"##)
                .unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, ["zinc", "apple", "mid_gray"]);
        assert_eq!(catalog.get("apple"), Some(Rgb::new(0x8d, 0xb6, 0x00)));
    }

    #[test]
    fn from_json_rejects_bad_input() {
        assert!(matches!(
            Catalog::from_json("[1, 2]"),
            Err(WheelError::InvalidCatalog(_))
        ));
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(WheelError::InvalidCatalog(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"red": 255}"#),
            Err(WheelError::InvalidCatalog(_))
        ));
        assert!(matches!(
            Catalog::from_json(r##"{"red": "#ff00"}"##),
            Err(WheelError::InvalidColor(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"odd": "+F+F+F"}"#),
            Err(WheelError::InvalidColor(_))
        ));
    }

    #[test]
    fn json_export_reloads_identically() {
        let catalog = Catalog::standard();
        let reloaded = Catalog::from_json(&catalog.to_json().unwrap()).unwrap();
        assert!(catalog.iter().eq(reloaded.iter()));
    }
}
