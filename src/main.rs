use anyhow::{Context, Result};
use chrono::{Local, NaiveTime};
use clap::Parser;
use log::{error, info, warn};
use std::fs::File;
use std::path::{Path, PathBuf};
use time_clock::{
    default_tree, render_to_surface, time_clock as clock, AppConfig, ClockTicker,
    FileImageResolver, WidgetId, WidgetTree, WIDGET_TYPE_TIME_CLOCK,
};

/// time-clock - render an image-composited analog clock face
#[derive(Parser, Debug, Clone)]
#[command(name = "time-clock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the clock images
    #[arg(short = 'i', long = "images", value_name = "DIR")]
    images: Option<PathBuf>,

    /// Clock size in pixels (e.g., -s=240x240)
    #[arg(short = 's', long = "size", value_name = "WxH", value_parser = parse_size)]
    size: Option<(i32, i32)>,

    /// Time to show instead of the wall clock (HH:MM:SS or HH:MM)
    #[arg(short = 't', long = "time", value_name = "TIME", value_parser = parse_time_arg)]
    time: Option<NaiveTime>,

    /// Render one frame to a PNG file
    #[arg(short = 'o', long = "png", value_name = "FILE")]
    png: Option<PathBuf>,

    /// Open a window that follows the wall clock (requires the `gtk` feature)
    #[arg(short = 'w', long = "window")]
    window: bool,

    /// Write the effective configuration back to the config file
    #[arg(long = "save-config")]
    save_config: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// Parse size string "WxH" into (i32, i32)
fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(|| format!("Expected format: WxH (e.g., 240x240), got: {}", s))?;
    let w = w.trim().parse::<i32>().map_err(|e| format!("Invalid width: {}", e))?;
    let h = h.trim().parse::<i32>().map_err(|e| format!("Invalid height: {}", e))?;
    if w <= 0 || h <= 0 {
        return Err(format!("Size must be positive, got: {}", s));
    }
    Ok((w, h))
}

fn parse_time_arg(s: &str) -> Result<NaiveTime, String> {
    time_clock::ticker::parse_time(s).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info, Level 2: debug, Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting time-clock v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(&cli)?;
    if let Some(dir) = &cli.images {
        config.images.dir = dir.clone();
    }
    if let Some((w, h)) = cli.size {
        config.window.width = w;
        config.window.height = h;
    }

    if cli.save_config {
        match &cli.config {
            Some(path) => config.save_to_path(path)?,
            None => config.save()?,
        }
        info!("Saved configuration");
    }

    let mut tree = default_tree();
    let id = tree.create(
        WIDGET_TYPE_TIME_CLOCK,
        0.0,
        0.0,
        config.window.width as f64,
        config.window.height as f64,
    )?;
    clock::cast_mut(&mut tree, id)?.apply_config(&config.clock);

    let images = FileImageResolver::with_limits(
        &config.images.dir,
        config.images.cache_entries,
        config.images.cache_expiry(),
    );
    let ticker = ClockTicker::new(id);
    match cli.time {
        Some(time) => ticker.apply(&mut tree, &time)?,
        None => ticker.tick(&mut tree)?,
    }

    if cli.window {
        return run_window(config, tree, id, images, cli.time.is_none());
    }

    let out = cli.png.unwrap_or_else(|| PathBuf::from("clock.png"));
    render_png(&tree, id, &images, &out)?;
    println!("{}", out.display());
    Ok(())
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    match &cli.config {
        Some(path) if path.exists() => {
            let config = AppConfig::load_from_path(path)?;
            info!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        Some(path) => {
            warn!("Config file {} does not exist, using defaults", path.display());
            Ok(AppConfig::default())
        }
        None => AppConfig::load().or_else(|e| {
            warn!("Failed to load configuration: {:#}", e);
            Ok(AppConfig::default())
        }),
    }
}

fn render_png(
    tree: &WidgetTree,
    id: WidgetId,
    images: &FileImageResolver,
    out: &Path,
) -> Result<()> {
    let surface = render_to_surface(tree, id, images)?;
    let mut file =
        File::create(out).with_context(|| format!("creating {}", out.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("writing {}", out.display()))?;
    info!("Rendered clock at {} to {}", Local::now().format("%H:%M:%S"), out.display());
    Ok(())
}

#[cfg(feature = "gtk")]
fn run_window(
    config: AppConfig,
    tree: WidgetTree,
    id: WidgetId,
    images: FileImageResolver,
    follow_wall_clock: bool,
) -> Result<()> {
    use gtk4::prelude::*;
    use gtk4::{glib, Application, ApplicationWindow};
    use std::cell::RefCell;
    use std::rc::Rc;
    use time_clock::ImageResolver;

    const APP_ID: &str = "org.time_clock.TimeClock";

    let tree = Rc::new(RefCell::new(tree));
    let images: Rc<dyn ImageResolver> = Rc::new(images);
    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        let area = time_clock_render::create_clock_area(tree.clone(), id, images.clone());
        let window = ApplicationWindow::builder()
            .application(app)
            .title(config.window.title.as_str())
            .default_width(config.window.width)
            .default_height(config.window.height)
            .child(&area)
            .build();

        if follow_wall_clock {
            let ticker = ClockTicker::new(id);
            let tree = tree.clone();
            let area_weak = area.downgrade();
            glib::timeout_add_local(config.tick_interval(), move || {
                let Some(area) = area_weak.upgrade() else {
                    return glib::ControlFlow::Break;
                };
                // Use try_borrow_mut to avoid blocking a draw in progress
                if let Ok(mut tree) = tree.try_borrow_mut() {
                    if let Err(e) = ticker.tick(&mut tree) {
                        warn!("Clock tick failed: {}", e);
                        return glib::ControlFlow::Break;
                    }
                }
                area.queue_draw();
                glib::ControlFlow::Continue
            });
        }

        window.present();
    });

    // Pass empty args since we already parsed them
    app.run_with_args(&["time-clock"]);
    Ok(())
}

#[cfg(not(feature = "gtk"))]
fn run_window(
    _config: AppConfig,
    _tree: WidgetTree,
    _id: WidgetId,
    _images: FileImageResolver,
    _follow_wall_clock: bool,
) -> Result<()> {
    anyhow::bail!("time-clock was built without the `gtk` feature; use --png instead")
}
