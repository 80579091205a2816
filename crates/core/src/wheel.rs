//! The color wheel: name resolution, angular positions, and scheme derivation.
//!
//! A [`ColorWheel`] owns an immutable [`Catalog`] and the ordered sequence of
//! 12 principal hues. Hue `i` sits at `i * 30` degrees. Every operation is a
//! pure function of that state, so a wheel can be shared freely across threads.
//!
//! Scheme members are resolved in two ways:
//! - the base slot (offset 0) keeps the color exactly as requested, including
//!   its shade;
//! - every other slot resolves to the mid-tone (`<hue>_3`) of the principal hue
//!   at that angle, falling back to the bare hue name when the catalog has no
//!   shaded variants.

use crate::catalog::{Catalog, DEFAULT_PRINCIPAL_HUES, HUE_STEP};
use crate::error::WheelError;
use crate::name::{normalize, shade_key, split_shade, BASE_SHADE, SHADE_COUNT};
use crate::record::{ColorInfo, ColorRecord};
use crate::scheme::SchemeKind;

/// Number of principal hues around the wheel.
pub const PRINCIPAL_HUE_COUNT: usize = 12;

/// Immutable color wheel over a catalog.
#[derive(Debug, Clone)]
pub struct ColorWheel {
    catalog: Catalog,
    hues: Vec<String>,
}

impl ColorWheel {
    /// Creates a wheel from a catalog and its 12 principal hues in wheel order.
    ///
    /// Returns `WheelError::InvalidCatalog` if the sequence does not contain
    /// exactly 12 distinct names or if any hue is missing from the catalog.
    pub fn new<S: AsRef<str>>(catalog: Catalog, hues: &[S]) -> Result<Self, WheelError> {
        if hues.len() != PRINCIPAL_HUE_COUNT {
            return Err(WheelError::InvalidCatalog(format!(
                "expected {PRINCIPAL_HUE_COUNT} principal hues, got {}",
                hues.len()
            )));
        }
        let hues: Vec<String> = hues.iter().map(|h| normalize(h.as_ref())).collect();
        for (i, hue) in hues.iter().enumerate() {
            if hues[..i].contains(hue) {
                return Err(WheelError::InvalidCatalog(format!(
                    "principal hue '{hue}' listed twice"
                )));
            }
            if catalog.get_key(hue).is_none() {
                return Err(WheelError::InvalidCatalog(format!(
                    "principal hue '{hue}' is not in the catalog"
                )));
            }
        }
        Ok(Self { catalog, hues })
    }

    /// The generated catalog with the default principal hues.
    pub fn standard() -> Self {
        Self::new(Catalog::standard(), &DEFAULT_PRINCIPAL_HUES)
            .expect("standard catalog contains every default principal hue")
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolves a color name to its record.
    ///
    /// Matching is case-insensitive and treats spaces and underscores alike.
    /// Unknown names yield `None`.
    pub fn lookup(&self, name: &str) -> Option<ColorRecord> {
        let key = normalize(name);
        self.record(&key)
    }

    fn record(&self, key: &str) -> Option<ColorRecord> {
        self.catalog
            .get_key(key)
            .map(|rgb| ColorRecord::new(key, rgb))
    }

    /// Index of the principal hue a normalized key belongs to, either directly
    /// or as `<hue>_<shade>`.
    fn family_index(&self, key: &str) -> Option<usize> {
        let direct = |k: &str| self.hues.iter().position(|h| h == k);
        direct(key).or_else(|| split_shade(key).and_then(|(base, _)| direct(base)))
    }

    /// The principal hue a color belongs to, if any.
    pub fn family_of(&self, name: &str) -> Option<&str> {
        self.family_index(&normalize(name))
            .map(|i| self.hues[i].as_str())
    }

    /// Wheel position in degrees (0..=330) of the color's principal hue family.
    ///
    /// Neutrals and other family-less colors yield `None`.
    pub fn position_of(&self, name: &str) -> Option<i32> {
        self.family_index(&normalize(name))
            .map(|i| i as i32 * HUE_STEP)
    }

    /// The principal hue nearest to `angle`.
    ///
    /// Any integer angle is accepted and wrapped into [0, 360). Halfway angles
    /// (15, 45, ...) round up to the next hue clockwise.
    pub fn color_at_angle(&self, angle: i32) -> &str {
        &self.hues[index_at_angle(angle)]
    }

    /// Mid-tone record for the principal hue at `index`.
    fn representative(&self, index: usize) -> Option<ColorRecord> {
        let hue = &self.hues[index];
        self.record(&shade_key(hue, BASE_SHADE))
            .or_else(|| self.record(hue))
    }

    /// Derives the members of `kind` around `base`, in the scheme's fixed order.
    ///
    /// Returns `None` only when `base` is not in the catalog. A base with no
    /// principal hue family (a neutral) is anchored at 0 degrees.
    pub fn derive_scheme(&self, base: &str, kind: SchemeKind) -> Option<Vec<ColorRecord>> {
        let key = normalize(base);
        let base_record = self.record(&key)?;
        let family = self.family_index(&key);

        if kind == SchemeKind::Monochromatic {
            let shades = family
                .map(|i| self.shades_of(&self.hues[i]))
                .unwrap_or_default();
            return Some(if shades.is_empty() {
                vec![base_record]
            } else {
                shades
            });
        }

        let position = match family {
            Some(i) => i as i32 * HUE_STEP,
            None => {
                tracing::debug!(base = %key, "base has no principal hue family, anchoring at 0");
                0
            }
        };

        let members = kind
            .offsets()
            .iter()
            .filter_map(|&offset| {
                if offset == 0 {
                    return Some(base_record.clone());
                }
                self.representative(index_at_angle(position + offset))
            })
            .collect();
        Some(members)
    }

    /// String-keyed variant of [`ColorWheel::derive_scheme`] for front-ends.
    ///
    /// Returns `None` when `base` is unknown and `Some(vec![])` when `kind` is
    /// not a recognized scheme identifier.
    pub fn derive_scheme_named(&self, base: &str, kind: &str) -> Option<Vec<ColorRecord>> {
        match kind.parse::<SchemeKind>() {
            Ok(kind) => self.derive_scheme(base, kind),
            Err(_) => self.lookup(base).map(|_| Vec::new()),
        }
    }

    /// All scheme kinds with their display labels, in listing order.
    pub fn list_scheme_kinds(&self) -> Vec<(SchemeKind, &'static str)> {
        SchemeKind::ALL.iter().map(|&k| (k, k.label())).collect()
    }

    /// Every catalog key, in insertion order.
    pub fn list_all_color_names(&self) -> Vec<&str> {
        self.catalog.names().collect()
    }

    pub fn list_principal_hue_names(&self) -> &[String] {
        &self.hues
    }

    /// The five shades of a principal hue, lightest first.
    ///
    /// Empty when `principal` is not a principal hue or the catalog lacks any
    /// of its shade variants.
    pub fn shades_of(&self, principal: &str) -> Vec<ColorRecord> {
        let key = normalize(principal);
        if !self.hues.contains(&key) {
            return Vec::new();
        }
        (1..=SHADE_COUNT)
            .map(|shade| self.record(&shade_key(&key, shade)))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default()
    }

    /// Mid-tone records of the 12 principal hues in wheel order.
    pub fn principal_records(&self) -> Vec<ColorRecord> {
        (0..self.hues.len())
            .filter_map(|i| self.representative(i))
            .collect()
    }

    /// Record plus HSV, wheel position and family, for a color description.
    pub fn describe(&self, name: &str) -> Option<ColorInfo> {
        let key = normalize(name);
        let record = self.record(&key)?;
        let family = self.family_index(&key);
        Some(ColorInfo::new(
            record,
            family.map(|i| i as i32 * HUE_STEP),
            family.map(|i| self.hues[i].clone()),
        ))
    }
}

/// Principal hue index nearest to `angle`, rounding halfway angles up.
fn index_at_angle(angle: i32) -> usize {
    let normalized = angle.rem_euclid(360);
    ((normalized + HUE_STEP / 2) / HUE_STEP) as usize % PRINCIPAL_HUE_COUNT
}
