// SPDX-License-Identifier: MIT
//
// pivotdeck — palette and theme engine for the dashboard, on the command line.
//
// The binary is a thin front end over the crates:
//
//   pd-color → Color, hex parsing, HSL conversion
//   pd-theme → palettes, contrast, color match, theme derivation, presets
//
// Every subcommand parses its colors up front, runs one pure derivation,
// and prints the result. Nothing here holds state between invocations.
//
//   palette  <SEED>              12-slot ramp, base slot marked
//   contrast <FG> <BG>           WCAG ratio and verdict
//   match    <SEED> <TARGET>     nearest palette slot
//   theme    [flags]             role assignment as CSS or JSON
//   presets                      builtin preset names

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pd_color::Color;
use pd_theme::config::ThemeConfig;
use pd_theme::contrast::{self, WcagLevel};
use pd_theme::matching;
use pd_theme::sink::{CssWriter, ThemeSink};
use pd_theme::{Palette, Theme, builtin};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "pivotdeck")]
#[command(version, about = "Palette generator and theme engine for the dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 12-slot palette generated from a seed color
    Palette {
        /// Seed color (#rrggbb)
        seed: String,

        /// Print JSON instead of swatches
        #[arg(long)]
        json: bool,
    },

    /// Check the WCAG contrast of a foreground on a background
    Contrast {
        /// Foreground color (#rrggbb)
        fg: String,

        /// Background color (#rrggbb)
        bg: String,

        /// Threshold to judge against
        #[arg(long, value_enum, default_value = "aa")]
        level: LevelArg,
    },

    /// Find the palette slot nearest to a target color
    Match {
        /// Seed color of the palette (#rrggbb)
        seed: String,

        /// Color to match (#rrggbb)
        target: String,
    },

    /// Derive a full theme and print its role colors
    Theme {
        /// Seed color for the surfaces
        #[arg(long)]
        seed: Option<String>,

        /// Highlight color
        #[arg(long)]
        highlight: Option<String>,

        /// Snap the highlight into the seed palette
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        color_match: Option<bool>,

        /// Start from a builtin preset
        #[arg(long)]
        preset: Option<String>,

        /// Read settings from a TOML file (flags win)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "css")]
        format: OutputFormat,
    },

    /// List builtin presets
    Presets,
}

/// WCAG threshold as accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LevelArg {
    Aa,
    AaLarge,
    Aaa,
    AaaLarge,
}

impl From<LevelArg> for WcagLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Aa => Self::Aa,
            LevelArg::AaLarge => Self::AaLarge,
            LevelArg::Aaa => Self::Aaa,
            LevelArg::AaaLarge => Self::AaaLarge,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Css,
    Json,
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter_layer = if cli.debug {
        EnvFilter::new("debug")
    } else if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("pivotdeck v{}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Palette { seed, json } => cmd_palette(&mut out, &seed, json, color),
        Commands::Contrast { fg, bg, level } => cmd_contrast(&mut out, &fg, &bg, level.into()),
        Commands::Match { seed, target } => cmd_match(&mut out, &seed, &target, color),
        Commands::Theme {
            seed,
            highlight,
            color_match,
            preset,
            config,
            format,
        } => {
            let flags = ThemeConfig {
                preset,
                seed,
                highlight,
                color_match,
            };
            let theme = resolve_theme(config.as_deref(), flags)?;
            cmd_theme(&mut out, &theme, format)
        }
        Commands::Presets => cmd_presets(&mut out),
    }
}

// ─── Subcommands ────────────────────────────────────────────────────────────

fn parse_color(input: &str, what: &str) -> Result<Color> {
    Color::hex(input).with_context(|| format!("bad {what} color"))
}

fn cmd_palette(out: &mut impl Write, seed: &str, json: bool, color: bool) -> Result<()> {
    let palette = Palette::generate(parse_color(seed, "seed")?);

    if json {
        serde_json::to_writer_pretty(&mut *out, &palette)?;
        writeln!(out)?;
        return Ok(());
    }

    for (idx, c) in palette.iter().enumerate() {
        let mark = if idx == palette.base_slot() { "  ← seed" } else { "" };
        writeln!(out, "{idx:>2}  {}{mark}", swatch(c, color))?;
    }
    Ok(())
}

fn cmd_contrast(out: &mut impl Write, fg: &str, bg: &str, level: WcagLevel) -> Result<()> {
    let fg = parse_color(fg, "foreground")?;
    let bg = parse_color(bg, "background")?;
    let verdict = contrast::evaluate_at(fg, bg, level);
    writeln!(out, "{fg} on {bg}: {verdict} at {level}")?;
    Ok(())
}

fn cmd_match(out: &mut impl Write, seed: &str, target: &str, color: bool) -> Result<()> {
    let palette = Palette::generate(parse_color(seed, "seed")?);
    let target = parse_color(target, "target")?;
    let idx = matching::closest_slot(&palette, target);
    let slot = palette[idx];
    writeln!(
        out,
        "slot {idx}  {}  (distance {:.2})",
        swatch(slot, color),
        slot.distance(target)
    )?;
    Ok(())
}

fn resolve_theme(config: Option<&std::path::Path>, flags: ThemeConfig) -> Result<Theme> {
    let file = match config {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("loading theme config {}", path.display()))?,
        None => ThemeConfig::default(),
    };
    let inputs = file.merge(flags).resolve().context("resolving theme inputs")?;
    let theme = Theme::derive(&inputs);

    theme.warn_contrast_issues();
    Ok(theme)
}

fn cmd_theme(out: &mut impl Write, theme: &Theme, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Css => {
            let mut writer = CssWriter::new(&mut *out);
            writer.apply(theme).context("writing CSS")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, theme)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn cmd_presets(out: &mut impl Write) -> Result<()> {
    for name in builtin::builtin_names() {
        if let Some(inputs) = builtin::builtin_inputs(name) {
            let mode = if inputs.color_match { "  color match" } else { "" };
            writeln!(out, "{name:<10} seed {}  highlight {}{mode}", inputs.seed, inputs.highlight)?;
        }
    }
    Ok(())
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Hex value on its own color, in whichever of black or white reads better.
fn swatch(c: Color, color: bool) -> String {
    if !color {
        return c.to_hex();
    }
    let fg = contrast::readable_foreground(c);
    format!(
        "\x1b[38;2;{};{};{};48;2;{};{};{}m {} \x1b[0m",
        fg.r,
        fg.g,
        fg.b,
        c.r,
        c.g,
        c.b,
        c.to_hex()
    )
}

// ─── Tests ──────────────────────────────────────────────────────────────────
