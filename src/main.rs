use clap::{Args, Parser, Subcommand};
use lifewheel::chart::{Chart, SegmentId, render_svg};
use lifewheel::config::{self, Config, Preset};
use lifewheel::events::ChartEvent;
use lifewheel::theme::Theme;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "lifewheel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Drive the chart through taps and an edit, then write the final frame as SVG
    Render(RenderArgs),
    /// Write the default config file and print its path
    InitConfig,
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    /// Built-in seed table (ignores seeds and angles from the config file)
    #[arg(short, long)]
    preset: Option<Preset>,

    /// Config file to read instead of the user config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Segment to tap, in order; repeat to tap several times
    #[arg(short, long = "tap")]
    taps: Vec<usize>,

    /// Value to apply to the selected segment after the taps
    #[arg(short, long)]
    value: Option<f64>,

    /// Animation frames to run before capturing
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Length of one frame in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Where to write the SVG; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => render(args),
        Commands::InitConfig => init_config(),
    };
    if let Err(e) = &result {
        log::error!("{:#}", e);
    }
    result
}

fn init_config() -> anyhow::Result<()> {
    let path = config::write_default_config()?;
    println!("{}", path.display());
    Ok(())
}

fn load(args: &RenderArgs) -> anyhow::Result<Config> {
    let cfg = match (&args.config, args.preset) {
        (Some(path), _) => config::load_config_from(path, true)?,
        (None, Some(_)) => Config::default(),
        (None, None) => config::load_or_default(),
    };
    Ok(match args.preset {
        Some(preset) => cfg.with_preset(preset),
        None => cfg,
    })
}

fn render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load(&args)?;
    let mut chart = Chart::from_config(&cfg);

    let events = args
        .taps
        .iter()
        .map(|&i| ChartEvent::Tap(SegmentId::from(i)))
        .chain(args.value.map(ChartEvent::ValueEdit));
    for event in events {
        if !chart.handle(event) {
            log::warn!("Event had no effect: {:?}", event);
        }
    }

    let dt = Duration::from_millis(args.frame_ms);
    let mut snapshot = chart.snapshot();
    for _ in 0..args.frames {
        snapshot = chart.tick(dt);
    }
    log::info!(
        "Captured frame after {} ticks (settled: {}, selected: {:?})",
        args.frames,
        snapshot.settled,
        snapshot.selected_id
    );

    let svg = render_svg(&snapshot, chart.geometry(), &Theme::default())?;
    match &args.output {
        Some(path) => fs_err::write(path, svg)?,
        None => std::io::stdout().write_all(svg.as_bytes())?,
    }
    Ok(())
}
