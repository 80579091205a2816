#![deny(unsafe_code)]
//! CLI binary for the itten color advisor.
//!
//! Subcommands:
//! - `colors` — list catalog color names
//! - `color <name>` — describe one color (hex, rgb, hsv, wheel position),
//!   optionally as a preview PNG
//! - `schemes` — list scheme kinds
//! - `scheme <base> <kind>` — derive a scheme, optionally write a swatch PNG
//! - `wheel` / `palette` — write the wheel or full palette as PNG
//! - `catalog` — export the active catalog as JSON

mod error;
mod logging;

use clap::{Parser, Subcommand};
use error::CliError;
use itten_core::{Catalog, ColorRecord, ColorWheel, SchemeKind, DEFAULT_PRINCIPAL_HUES};
use itten_render::pixel::{self, Labels};
use itten_render::snapshot;
use itten_render::text::Typeface;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "itten", about = "Color harmony advisor on the 12-hue Itten wheel")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Catalog JSON file mapping names to "#RRGGBB". Defaults to the generated catalog.
    #[arg(long, global = true, env = "ITTEN_CATALOG")]
    catalog: Option<PathBuf>,

    /// Font file for image captions. Defaults to a system font; images are
    /// drawn without text when none is found.
    #[arg(long, global = true, env = "ITTEN_FONT")]
    font: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every color name in the catalog.
    Colors {
        /// Only the 12 principal hues, in wheel order.
        #[arg(long)]
        principal: bool,
    },
    /// Describe a single color.
    Color {
        /// Color name; words may be separated by spaces (e.g. "yellow green 2").
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Write a preview card PNG to this path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available scheme kinds.
    Schemes,
    /// Derive a color scheme from a base color.
    Scheme {
        /// Base color name (e.g. "red", "azure_4").
        base: String,

        /// Scheme kind (complementary, triad, analogous, square,
        /// split_complementary, rectangle, monochromatic).
        kind: String,

        /// Write a swatch strip PNG to this path.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Swatch strip width in pixels.
        #[arg(short = 'W', long, default_value_t = 500)]
        width: u32,

        /// Swatch strip height in pixels.
        #[arg(short = 'H', long, default_value_t = 250)]
        height: u32,
    },
    /// Write the 12-sector color wheel as a PNG.
    Wheel {
        /// Output file path.
        #[arg(short, long, default_value = "wheel.png")]
        output: PathBuf,

        /// Image width and height in pixels.
        #[arg(short, long, default_value_t = 500)]
        size: u32,
    },
    /// Write every catalog color as a PNG grid.
    Palette {
        /// Output file path.
        #[arg(short, long, default_value = "palette.png")]
        output: PathBuf,

        /// Cells per row.
        #[arg(short, long, default_value_t = 6)]
        columns: u32,
    },
    /// Export the active catalog as JSON.
    Catalog {
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Builds the wheel from a catalog file, or the generated catalog when none is given.
fn load_wheel(path: Option<&Path>) -> Result<ColorWheel, CliError> {
    let Some(path) = path else {
        tracing::debug!("using generated catalog");
        return Ok(ColorWheel::standard());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read catalog {}: {e}", path.display())))?;
    let catalog = Catalog::from_json(&text)?;
    tracing::info!(path = %path.display(), entries = catalog.len(), "loaded catalog");
    Ok(ColorWheel::new(catalog, &DEFAULT_PRINCIPAL_HUES)?)
}

/// The font for image captions: the given file, else the first system font.
fn load_font(path: Option<&Path>) -> Result<Option<Typeface>, CliError> {
    if let Some(path) = path {
        return Ok(Some(Typeface::from_file(path)?));
    }
    let font = Typeface::system();
    if font.is_none() {
        tracing::warn!("no system font found; images will have no captions (use --font)");
    }
    Ok(font)
}

/// Caption set for an image, if a font is available.
fn labels<'a>(font: Option<&'a Typeface>, title: &'a str) -> Option<Labels<'a>> {
    font.map(|font| Labels { font, title })
}

fn not_found(name: &str) -> CliError {
    CliError::Input(format!(
        "color '{name}' not found; run `itten colors` to see available colors"
    ))
}

fn print_json(out: &mut impl Write, value: &serde_json::Value) -> Result<(), CliError> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn write_image(buf: &itten_render::RgbaBuffer, path: &Path) -> Result<(), CliError> {
    snapshot::write_png(buf, path)?;
    tracing::info!(path = %path.display(), "wrote image");
    Ok(())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let wheel = load_wheel(cli.catalog.as_deref())?;

    match cli.command {
        Command::Colors { principal } => {
            let names: Vec<&str> = if principal {
                wheel
                    .list_principal_hue_names()
                    .iter()
                    .map(String::as_str)
                    .collect()
            } else {
                wheel.list_all_color_names()
            };
            if cli.json {
                print_json(out, &serde_json::json!(names))?;
            } else {
                for name in names {
                    writeln!(out, "{name}")?;
                }
            }
        }
        Command::Color { name, output } => {
            let name = name.join(" ");
            let info = wheel.describe(&name).ok_or_else(|| not_found(&name))?;
            if let Some(path) = &output {
                let font = load_font(cli.font.as_deref())?;
                write_image(&pixel::preview(&info, font.as_ref())?, path)?;
            }
            if cli.json {
                let mut value = serde_json::to_value(&info)?;
                if let Some(path) = &output {
                    value["output"] = serde_json::json!(path.display().to_string());
                }
                print_json(out, &value)?;
            } else {
                let rgb = info.record.rgb();
                let [h, s, v] = info.hsv;
                writeln!(out, "{}", info.display_name)?;
                writeln!(out, "HEX: {}", info.record.hex())?;
                writeln!(out, "RGB: {}, {}, {}", rgb.r, rgb.g, rgb.b)?;
                writeln!(out, "HSV: {h}°, {s}%, {v}%")?;
                match (info.position, &info.family) {
                    (Some(pos), Some(family)) => {
                        writeln!(out, "Wheel position: {pos}° ({family})")?
                    }
                    _ => writeln!(out, "Wheel position: N/A")?,
                }
                if let Some(path) = &output {
                    writeln!(out, "\nwrote {}", path.display())?;
                }
            }
        }
        Command::Schemes => {
            let kinds = wheel.list_scheme_kinds();
            if cli.json {
                let list: Vec<_> = kinds
                    .iter()
                    .map(|(kind, label)| serde_json::json!({"kind": kind, "label": label}))
                    .collect();
                print_json(out, &serde_json::json!(list))?;
            } else {
                for (kind, label) in kinds {
                    writeln!(out, "{:<20} {label}", kind.id())?;
                }
            }
        }
        Command::Scheme {
            base,
            kind,
            output,
            width,
            height,
        } => {
            let members = wheel
                .derive_scheme_named(&base, &kind)
                .ok_or_else(|| not_found(&base))?;
            if members.is_empty() {
                let known: Vec<&str> = SchemeKind::ALL.iter().map(|k| k.id()).collect();
                return Err(CliError::Input(format!(
                    "unknown scheme '{kind}'; expected one of: {}",
                    known.join(", ")
                )));
            }
            let kind: SchemeKind = kind.parse()?;
            tracing::debug!(base = %base, kind = %kind, members = members.len(), "derived scheme");

            if let Some(path) = &output {
                let font = load_font(cli.font.as_deref())?;
                let title = format!("{}: {}", kind.label(), base_display_name(&wheel, &base));
                let captions = labels(font.as_ref(), &title);
                let strip = pixel::swatch_strip(&members, width, height, captions)?;
                write_image(&strip, path)?;
            }

            if cli.json {
                let info = serde_json::json!({
                    "scheme": kind,
                    "label": kind.label(),
                    "base": base_display_name(&wheel, &base),
                    "members": members,
                    "output": output.as_ref().map(|p| p.display().to_string()),
                });
                print_json(out, &info)?;
            } else {
                writeln!(out, "Scheme: {}", kind.label())?;
                writeln!(out, "Base color: {}", base_display_name(&wheel, &base))?;
                writeln!(out)?;
                for (i, record) in members.iter().enumerate() {
                    writeln!(out, "{}. {}: {}", i + 1, record.display_name(), record.hex())?;
                }
                if let Some(path) = &output {
                    writeln!(out, "\nwrote {}", path.display())?;
                }
            }
        }
        Command::Wheel { output, size } => {
            let font = load_font(cli.font.as_deref())?;
            let image = pixel::wheel(&wheel, size, labels(font.as_ref(), "Itten color wheel"))?;
            write_image(&image, &output)?;
            report_output(out, cli.json, &output)?;
        }
        Command::Palette { output, columns } => {
            let records: Vec<ColorRecord> = wheel
                .list_all_color_names()
                .into_iter()
                .filter_map(|name| wheel.lookup(name))
                .collect();
            let font = load_font(cli.font.as_deref())?;
            let captions = labels(font.as_ref(), "Full palette");
            let image = pixel::palette_grid(&records, columns, captions)?;
            write_image(&image, &output)?;
            report_output(out, cli.json, &output)?;
        }
        Command::Catalog { output } => {
            let json = wheel.catalog().to_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json + "\n").map_err(|e| {
                        CliError::Io(format!("cannot write {}: {e}", path.display()))
                    })?;
                    report_output(out, cli.json, &path)?;
                }
                None => writeln!(out, "{json}")?,
            }
        }
    }

    Ok(())
}

/// Display name of the base color as the user will recognize it.
fn base_display_name(wheel: &ColorWheel, base: &str) -> String {
    wheel
        .lookup(base)
        .map(|r| r.display_name())
        .unwrap_or_else(|| base.to_string())
}

fn report_output(out: &mut impl Write, json: bool, path: &Path) -> Result<(), CliError> {
    if json {
        print_json(out, &serde_json::json!({"output": path.display().to_string()}))
    } else {
        writeln!(out, "wrote {}", path.display())?;
        Ok(())
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);
    let json_mode = cli.json;
    let stdout = io::stdout();
    if let Err(e) = run(cli, &mut stdout.lock()) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        // Only flags given here may configure a test run.
        std::env::remove_var("ITTEN_CATALOG");
        std::env::remove_var("ITTEN_FONT");
        let cli = Cli::try_parse_from(std::iter::once("itten").chain(args.iter().copied()))
            .expect("arguments parse");
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn colors_lists_whole_catalog() {
        let out = run_args(&["colors"]).unwrap();
        assert_eq!(out.lines().count(), ColorWheel::standard().catalog().len());
        assert_eq!(out.lines().next(), Some("red_1"));
    }

    #[test]
    fn colors_principal_lists_twelve_hues_as_json() {
        let out = run_args(&["--json", "colors", "--principal"]).unwrap();
        let names: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(names, DEFAULT_PRINCIPAL_HUES);
    }

    #[test]
    fn color_joins_words_and_reports_position() {
        let out = run_args(&["color", "Yellow", "Green", "2"]).unwrap();
        assert!(out.starts_with("Yellow Green 2\n"), "got: {out}");
        assert!(out.contains("Wheel position: 90° (yellow_green)"), "got: {out}");
    }

    #[test]
    fn color_neutral_has_no_position() {
        let out = run_args(&["color", "gray"]).unwrap();
        assert!(out.contains("HEX: #888888"));
        assert!(out.contains("Wheel position: N/A"));
    }

    #[test]
    fn color_writes_preview_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emerald.png");
        let out = run_args(&["--json", "color", "emerald_2", "-o", path.to_str().unwrap()]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["record"]["name"], "emerald_2");
        assert_eq!(v["output"], path.display().to_string());
        assert!(path.exists());
    }

    #[test]
    fn color_unknown_is_input_error() {
        let err = run_args(&["color", "teal"]).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("teal"));
    }

    #[test]
    fn schemes_lists_all_kinds() {
        let out = run_args(&["schemes"]).unwrap();
        assert_eq!(out.lines().count(), 7);
        assert!(out.contains("split_complementary"));
    }

    #[test]
    fn scheme_prints_numbered_members() {
        let out = run_args(&["scheme", "red", "analogous"]).unwrap();
        assert!(out.contains("Base color: Red"));
        assert!(out.contains("1. Crimson 3: #"), "got: {out}");
        assert!(out.contains("2. Red: #990000"));
        assert!(out.contains("3. Orange 3: "));
    }

    #[test]
    fn scheme_json_lists_member_records() {
        let out = run_args(&["--json", "scheme", "red", "complementary"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["scheme"], "complementary");
        assert_eq!(v["members"][0]["name"], "red");
        assert_eq!(v["members"][1]["name"], "cyan_3");
        assert_eq!(v["members"][1]["rgb"], serde_json::json!([0, 153, 153]));
    }

    #[test]
    fn scheme_unknown_base_or_kind_is_input_error() {
        assert_eq!(
            run_args(&["scheme", "unknown_color_xyz", "triad"])
                .unwrap_err()
                .exit_code(),
            12
        );
        let err = run_args(&["scheme", "red", "pentagon"]).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("monochromatic"));
    }

    #[test]
    fn scheme_writes_swatch_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triad.png");
        let path_str = path.to_str().unwrap();
        run_args(&["scheme", "blue", "triad", "-o", path_str, "-W", "300", "-H", "60"]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn wheel_and_palette_write_images() {
        let dir = tempfile::tempdir().unwrap();
        let wheel_path = dir.path().join("wheel.png");
        let palette_path = dir.path().join("palette.png");
        run_args(&["wheel", "-o", wheel_path.to_str().unwrap(), "-s", "120"]).unwrap();
        run_args(&["palette", "-o", palette_path.to_str().unwrap()]).unwrap();
        assert!(wheel_path.exists());
        assert!(palette_path.exists());
    }

    #[test]
    fn palette_with_huge_column_count_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.png");
        run_args(&["palette", "-o", path.to_str().unwrap(), "-c", "50000000"]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn oversized_wheel_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wheel.png");
        let err = run_args(&["wheel", "-o", path.to_str().unwrap(), "-s", "100000"]).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(!path.exists());
    }

    #[test]
    fn missing_font_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wheel.png");
        let err = run_args(&[
            "--font",
            "/nonexistent/font.ttf",
            "wheel",
            "-o",
            path.to_str().unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn unparseable_font_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("broken.ttf");
        std::fs::write(&font, b"not a font").unwrap();
        let path = dir.path().join("wheel.png");
        let err = run_args(&[
            "--font",
            font.to_str().unwrap(),
            "wheel",
            "-o",
            path.to_str().unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn text_commands_ignore_font_flag() {
        let out = run_args(&["--font", "/nonexistent/font.ttf", "scheme", "red", "triad"]).unwrap();
        assert!(out.contains("Scheme: "));
    }

    #[test]
    fn catalog_export_reloads_as_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        let path_str = path.to_str().unwrap();
        run_args(&["catalog", "-o", path_str]).unwrap();

        let out = run_args(&["--catalog", path_str, "scheme", "red", "complementary"]).unwrap();
        assert!(out.contains("2. Cyan 3: #009999"), "got: {out}");
    }

    #[test]
    fn missing_catalog_file_is_io_error() {
        let err = run_args(&["--catalog", "/nonexistent/colors.json", "colors"]).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn catalog_without_principal_hues_is_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.json");
        std::fs::write(&path, r##"{"red": "#FF0000"}"##).unwrap();
        let err = run_args(&["--catalog", path.to_str().unwrap(), "colors"]).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }
}
