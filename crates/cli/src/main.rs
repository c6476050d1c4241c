#![deny(unsafe_code)]
//! CLI for the OKLCH relative color picker.
//!
//! Subcommands:
//! - `css` — derive a result color from an origin and transforms, print the
//!   CSS relative color expression
//! - `render` — write the lightness × chroma gradient plane for a hue as PNG
//! - `strip` — write the hue strip as PNG
//! - `presets` — print the preset origin colors

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use log::info;
use oklch_picker_core::{
    GradientPlane, HueStrip, OklchColor, OklchComponent, Preset, ResultColorEngine, Transform,
};
use oklch_picker_raster::snapshot::write_png;
use oklch_picker_raster::{render_gradient, render_hue_strip};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "oklch-picker", about = "OKLCH relative color picker")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply transforms to an origin color and print the CSS expression.
    Css {
        /// Origin color: a preset name or `oklch(L C H / A)`.
        #[arg(short, long)]
        origin: Option<String>,

        /// Lightness transform (`*1.5`, `+0.1`, `=0.7`).
        #[arg(short = 'l', long = "l", allow_hyphen_values = true)]
        lightness: Option<String>,

        /// Chroma transform.
        #[arg(short = 'c', long = "c", allow_hyphen_values = true)]
        chroma: Option<String>,

        /// Hue transform (`+20`, `-30`, `=45`).
        #[arg(long = "h", allow_hyphen_values = true)]
        hue: Option<String>,

        /// Alpha transform.
        #[arg(short = 'a', long = "a", allow_hyphen_values = true)]
        alpha: Option<String>,

        /// Reset components to their identity transform (repeatable).
        #[arg(long)]
        reset: Vec<String>,

        /// Toggle components between absolute and relative form (repeatable).
        #[arg(short, long)]
        toggle: Vec<String>,

        /// Load session state (origin and transforms) from a JSON file.
        #[arg(short, long)]
        session: Option<PathBuf>,

        /// Save the resulting session state to a JSON file.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Write the lightness × chroma gradient plane for a hue as PNG.
    Render {
        /// Hue in degrees.
        #[arg(long)]
        hue: Option<f64>,

        /// Logical width in pixels.
        #[arg(short = 'W', long)]
        width: Option<usize>,

        /// Logical height in pixels.
        #[arg(short = 'H', long)]
        height: Option<usize>,

        /// Chroma at the right edge.
        #[arg(long)]
        max_chroma: Option<f64>,

        /// Device pixel ratio.
        #[arg(long)]
        scale: Option<f64>,

        /// Plane parameters as a JSON string; flags override its values.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "plane.png")]
        output: PathBuf,
    },
    /// Write the hue strip at the result color's lightness as PNG.
    Strip {
        /// Lightness of the strip; defaults to the result color's.
        #[arg(short, long)]
        lightness: Option<f64>,

        /// Origin color: a preset name or `oklch(L C H / A)`.
        #[arg(long)]
        origin: Option<String>,

        /// Session JSON file whose result color sets the lightness.
        #[arg(short, long)]
        session: Option<PathBuf>,

        /// Width in pixels.
        #[arg(short = 'W', long, default_value_t = 280)]
        width: usize,

        /// Height in pixels.
        #[arg(short = 'H', long, default_value_t = 36)]
        height: usize,

        /// Output file path.
        #[arg(short, long, default_value = "strip.png")]
        output: PathBuf,
    },
    /// List the preset origin colors.
    Presets,
}

/// Resolves `--origin`: a preset name first, then an `oklch()` literal.
fn parse_origin(value: &str) -> Result<OklchColor, CliError> {
    match Preset::from_name(value) {
        Ok(preset) => Ok(preset.color),
        Err(_) => value.parse::<OklchColor>().map_err(CliError::from),
    }
}

fn parse_components(names: &[String]) -> Result<Vec<OklchComponent>, CliError> {
    names
        .iter()
        .map(|n| n.parse::<OklchComponent>().map_err(CliError::from))
        .collect()
}

/// Builds the session from an optional file, then applies `--origin`.
fn load_engine(
    session: Option<PathBuf>,
    origin: Option<String>,
) -> Result<ResultColorEngine, CliError> {
    let mut engine = match session {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            ResultColorEngine::from_json(&text)?
        }
        None => ResultColorEngine::default(),
    };
    if let Some(origin) = origin {
        engine.set_origin_color(parse_origin(&origin)?);
    }
    Ok(engine)
}

#[allow(clippy::too_many_arguments)]
fn run_css(
    json: bool,
    origin: Option<String>,
    transforms: [Option<String>; 4],
    reset: Vec<String>,
    toggle: Vec<String>,
    session: Option<PathBuf>,
    save: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut engine = load_engine(session, origin)?;
    for (component, expr) in OklchComponent::ALL.into_iter().zip(transforms) {
        if let Some(expr) = expr {
            engine.set_transform(component, expr.parse::<Transform>()?);
        }
    }
    for component in parse_components(&reset)? {
        engine.reset_component(component);
    }
    for component in parse_components(&toggle)? {
        engine.toggle_component(component);
    }

    if let Some(path) = save {
        fs::write(&path, engine.to_json()?)
            .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
        info!("saved session to {}", path.display());
    }

    let result = engine.result_color();
    let hex = result.to_srgb().to_hex();
    let css = engine.to_css();
    if json {
        let info = serde_json::json!({
            "css": css,
            "origin": engine.origin(),
            "origin_preset": engine.origin_preset().map(|p| p.slug),
            "transforms": engine.transforms(),
            "result": result,
            "result_css": result.to_string(),
            "result_hex": hex,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        let label = engine.origin_preset().map_or("custom", |p| p.label);
        println!("{css}");
        eprintln!("origin: {} ({label})", engine.origin());
        eprintln!("result: {result} ({hex})");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Presets => {
            if cli.json {
                let presets: Vec<_> = Preset::all()
                    .iter()
                    .map(|p| {
                        serde_json::json!({
                            "label": p.label,
                            "slug": p.slug,
                            "color": p.color,
                            "css": p.color.to_string(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&presets)?);
            } else {
                println!("Presets:");
                for p in Preset::all() {
                    println!("  {:<16} {}", p.slug, p.color);
                }
            }
        }
        Command::Css {
            origin,
            lightness,
            chroma,
            hue,
            alpha,
            reset,
            toggle,
            session,
            save,
        } => run_css(
            cli.json,
            origin,
            [lightness, chroma, hue, alpha],
            reset,
            toggle,
            session,
            save,
        )?,
        Command::Render {
            hue,
            width,
            height,
            max_chroma,
            scale,
            params,
            output,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let base = GradientPlane::from_json(&params);
            let plane = GradientPlane {
                width: width.unwrap_or(base.width),
                height: height.unwrap_or(base.height),
                hue: hue.unwrap_or(base.hue),
                max_chroma: max_chroma.unwrap_or(base.max_chroma),
                scale: scale.unwrap_or(base.scale),
            };

            let raster = render_gradient(&plane)?;
            write_png(&raster, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "params": plane.params(),
                    "pixels": [raster.width(), raster.height()],
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered plane (hue {}, max chroma {}, {}x{} px) -> {}",
                    plane.hue,
                    plane.max_chroma,
                    raster.width(),
                    raster.height(),
                    output.display()
                );
            }
        }
        Command::Strip {
            lightness,
            origin,
            session,
            width,
            height,
            output,
        } => {
            let lightness = match lightness {
                Some(l) => l,
                None => load_engine(session, origin)?.result_color().l,
            };
            let strip = HueStrip::new(width, height, lightness);
            let raster = render_hue_strip(&strip)?;
            write_png(&raster, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "lightness": strip.lightness,
                    "chroma": strip.chroma,
                    "pixels": [raster.width(), raster.height()],
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered hue strip (lightness {lightness}, {width}x{height}) -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
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
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_origin_accepts_preset_and_literal() {
        assert_eq!(parse_origin("ocean-blue").unwrap().h, 220.0);
        let literal = parse_origin("oklch(0.4 0.1 20 / 0.5)").unwrap();
        assert_eq!(literal, OklchColor::new(0.4, 0.1, 20.0, 0.5));
        assert_eq!(parse_origin("nonsense").unwrap_err().exit_code(), 12);
    }

    #[test]
    fn css_subcommand_accepts_negative_hue_transform() {
        let cli = Cli::try_parse_from(["oklch-picker", "css", "--h", "-30", "--toggle", "l"]).unwrap();
        match cli.command {
            Command::Css { hue, toggle, .. } => {
                assert_eq!(hue.as_deref(), Some("-30"));
                assert_eq!(toggle, vec!["l".to_string()]);
            }
            _ => panic!("expected css subcommand"),
        }
    }

    #[test]
    fn strip_lightness_defaults_to_result_color() {
        let engine = load_engine(None, Some("forest-green".into())).unwrap();
        assert_eq!(engine.result_color().l, 0.6);
        assert_eq!(load_engine(None, None).unwrap().result_color().l, 0.618);

        let cli = Cli::try_parse_from(["oklch-picker", "strip", "--origin", "ocean-blue"]).unwrap();
        match cli.command {
            Command::Strip { lightness, origin, .. } => {
                assert_eq!(lightness, None);
                assert_eq!(origin.as_deref(), Some("ocean-blue"));
            }
            _ => panic!("expected strip subcommand"),
        }
    }

    #[test]
    fn load_engine_reads_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut saved = ResultColorEngine::new(OklchColor::new(0.4, 0.1, 20.0, 1.0));
        saved.set_transform(OklchComponent::L, Transform::Multiply(1.5));
        fs::write(&path, saved.to_json().unwrap()).unwrap();

        let loaded = load_engine(Some(path.clone()), None).unwrap();
        assert_eq!(loaded.result_color().l, 0.6);
        assert!(matches!(
            load_engine(Some(dir.path().join("missing.json")), None),
            Err(CliError::Io(_))
        ));
    }

    #[test]
    fn parse_components_rejects_unknown() {
        assert!(parse_components(&["h".into(), "alpha".into()]).is_ok());
        assert_eq!(parse_components(&["q".into()]).unwrap_err().exit_code(), 12);
    }
}
