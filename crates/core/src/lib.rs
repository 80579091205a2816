#![deny(unsafe_code)]
//! Core types for the itten color advisor.
//!
//! Provides the `ColorWheel` (name lookup, wheel positions, scheme derivation),
//! the immutable `Catalog` of named colors and its shade generator,
//! `ColorRecord`, `SchemeKind`, and the `Rgb`/`Hsv` color types.

pub mod catalog;
pub mod color;
pub mod error;
pub mod name;
pub mod record;
pub mod scheme;
pub mod wheel;

pub use catalog::{Catalog, DEFAULT_PRINCIPAL_HUES};
pub use color::{Hsv, Rgb};
pub use error::WheelError;
pub use record::{ColorInfo, ColorRecord};
pub use scheme::SchemeKind;
pub use wheel::ColorWheel;
