//! Petal CLI
//!
//! Inspect extend geometry and simulate FAB animations without a renderer.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use petal_animation::AnimationScheduler;
use petal_core::LayoutDirection;
use petal_fab::{resolve, AnimateFrom, ExtendInput, FabContext, IconMode};
use petal_theme::{ColorToken, ThemeState};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod simulate;

use simulate::{ExtendOptions, RunOptions, Segment, DEFAULT_MAX_FRAMES};

#[derive(Parser)]
#[command(name = "petal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Petal FAB geometry and animation tool", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Theme config file (defaults to ./petal.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    Left,
    Right,
}

impl From<Side> for AnimateFrom {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => AnimateFrom::Left,
            Side::Right => AnimateFrom::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IconModeArg {
    Static,
    Dynamic,
}

impl From<IconModeArg> for IconMode {
    fn from(mode: IconModeArg) -> Self {
        match mode {
            IconModeArg::Static => IconMode::Static,
            IconModeArg::Dynamic => IconMode::Dynamic,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve extend geometry for a label size
    Geometry {
        /// Measured label width in pixels
        #[arg(long)]
        label_width: f32,

        /// Measured label height in pixels
        #[arg(long, default_value = "0")]
        label_height: f32,

        /// Collapsed FAB diameter
        #[arg(long, default_value = "56")]
        anchor: f32,

        /// Side the FAB is attached to
        #[arg(long, value_enum, default_value = "right")]
        from: Side,

        /// Right-to-left layout
        #[arg(long)]
        rtl: bool,

        /// Icon behavior while extending
        #[arg(long, value_enum, default_value = "static")]
        icon_mode: IconModeArg,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate opening (and optionally closing) a speed dial
    Group {
        /// Number of actions
        #[arg(long, default_value = "3")]
        actions: usize,

        /// Frame duration in milliseconds
        #[arg(long, default_value = "16")]
        step_ms: f32,

        /// Maximum frames per transition
        #[arg(long)]
        frames: Option<usize>,

        /// Close the group again after it opened
        #[arg(long)]
        close: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate extending an animated FAB
    Extend {
        /// Measured label width in pixels
        #[arg(long)]
        label_width: f32,

        /// Measured label height in pixels
        #[arg(long, default_value = "20")]
        label_height: f32,

        /// Side the FAB is attached to
        #[arg(long, value_enum, default_value = "right")]
        from: Side,

        /// Right-to-left layout
        #[arg(long)]
        rtl: bool,

        /// Icon behavior while extending
        #[arg(long, value_enum, default_value = "static")]
        icon_mode: IconModeArg,

        /// Frame duration in milliseconds
        #[arg(long, default_value = "16")]
        step_ms: f32,

        /// Maximum frames per transition
        #[arg(long)]
        frames: Option<usize>,

        /// Collapse again after extending
        #[arg(long)]
        collapse: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved theme
    Theme {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let theme = config::load_theme(cli.config.as_deref())?;
    ThemeState::set(theme);

    match cli.command {
        Commands::Geometry {
            label_width,
            label_height,
            anchor,
            from,
            rtl,
            icon_mode,
            json,
        } => cmd_geometry(
            ExtendInput::new(anchor, label_width)
                .label_height(label_height)
                .animate_from(from.into())
                .direction(direction(rtl))
                .icon_mode(icon_mode.into()),
            json,
        ),

        Commands::Group {
            actions,
            step_ms,
            frames,
            close,
            json,
        } => cmd_group(actions, step_ms, frames, close, json),

        Commands::Extend {
            label_width,
            label_height,
            from,
            rtl,
            icon_mode,
            step_ms,
            frames,
            collapse,
            json,
        } => cmd_extend(
            ExtendOptions {
                label_width,
                label_height,
                animate_from: from.into(),
                icon_mode: icon_mode.into(),
                collapse,
            },
            direction(rtl),
            step_ms,
            frames,
            json,
        ),

        Commands::Theme { json } => cmd_theme(json),
    }
}

fn direction(rtl: bool) -> LayoutDirection {
    if rtl {
        LayoutDirection::Rtl
    } else {
        LayoutDirection::Ltr
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_geometry(input: ExtendInput, json: bool) -> Result<()> {
    if !input.anchor_size.is_finite() || input.anchor_size <= 0.0 {
        anyhow::bail!("Invalid anchor size {}: must be positive", input.anchor_size);
    }
    if !input.label_width.is_finite() || input.label_width < 0.0 {
        anyhow::bail!("Invalid label width {}", input.label_width);
    }

    let geometry = resolve(&input);
    if json {
        return print_json(&geometry);
    }

    println!("origin           {:?}", geometry.origin);
    println!("pinned edge      {:?}", geometry.origin.pinned_edge());
    println!("pill width       {}", geometry.pill_width);
    println!("pill translate   {}", geometry.pill_translate_x);
    println!("icon translate   {}", geometry.icon_translate_x);
    println!("label offset     {}", geometry.label_offset_x);
    println!("border radius    {}", geometry.border_radius);
    Ok(())
}

fn run_options(step_ms: f32, frames: Option<usize>) -> Result<RunOptions> {
    simulate::check_step(step_ms)?;
    Ok(RunOptions {
        step_ms,
        max_frames: frames.unwrap_or(DEFAULT_MAX_FRAMES),
    })
}

fn cmd_group(
    actions: usize,
    step_ms: f32,
    frames: Option<usize>,
    close: bool,
    json: bool,
) -> Result<()> {
    let options = run_options(step_ms, frames)?;
    let scheduler = AnimationScheduler::new();
    let context = FabContext::current(scheduler.handle());

    info!("Simulating a speed dial with {} actions", actions);
    let segments = simulate::group(&context, &scheduler, actions, close, options)?;
    if json {
        return print_json(&segments);
    }

    for segment in &segments {
        print_header(segment);
        for frame in &segment.frames {
            let visual = &frame.visual;
            let progress: Vec<String> = visual
                .actions
                .iter()
                .map(|a| format!("{:.2}", a.progress))
                .collect();
            println!(
                "{:>5}  {:>7.1}ms  {:<8}  backdrop {:.2}  actions [{}]",
                frame.frame,
                frame.time_ms,
                format!("{:?}", visual.phase).to_lowercase(),
                visual.backdrop.opacity,
                progress.join(" ")
            );
        }
    }
    Ok(())
}

fn cmd_extend(
    extend: ExtendOptions,
    direction: LayoutDirection,
    step_ms: f32,
    frames: Option<usize>,
    json: bool,
) -> Result<()> {
    let options = run_options(step_ms, frames)?;
    let scheduler = AnimationScheduler::new();
    let context = FabContext::current(scheduler.handle()).with_direction(direction);

    info!(
        "Simulating an extending FAB with a {}px label",
        extend.label_width
    );
    let segments = simulate::extend(&context, &scheduler, extend, options)?;
    if json {
        return print_json(&segments);
    }

    for segment in &segments {
        print_header(segment);
        for frame in &segment.frames {
            let visual = &frame.visual;
            println!(
                "{:>5}  {:>7.1}ms  {:<10}  width {:>7.2}  pill {:>8.2}  icon {:>8.2}  label {:.2}",
                frame.frame,
                frame.time_ms,
                format!("{:?}", visual.phase).to_lowercase(),
                visual.width,
                visual.pill_translate_x,
                visual.icon_translate_x,
                visual.label_opacity
            );
        }
    }
    Ok(())
}

fn print_header<T>(segment: &Segment<T>) {
    println!(
        "== {} ({} frames)",
        segment.label,
        segment.frames.len().saturating_sub(1)
    );
}

#[derive(Serialize)]
struct ThemeReport {
    name: String,
    scheme: petal_theme::ColorScheme,
    animation_scale: f32,
    colors: Vec<(&'static str, String)>,
}

fn cmd_theme(json: bool) -> Result<()> {
    let theme = ThemeState::get();
    let report = ThemeReport {
        name: theme.name().to_string(),
        scheme: theme.scheme(),
        animation_scale: theme.animation_scale(),
        colors: ColorToken::ALL
            .iter()
            .map(|&token| (token.key(), theme.color(token).to_hex()))
            .collect(),
    };

    if json {
        return print_json(&report);
    }

    println!("theme            {}", report.name);
    println!("scheme           {:?}", report.scheme);
    println!("animation scale  {}", report.animation_scale);
    for (key, hex) in &report.colors {
        println!("{key:<24} {hex}");
    }
    Ok(())
}
