use std::path::PathBuf;

use clap::Parser;
use macroquad::prelude::*;
use sparse_life::{
    Config, GameState,
    input::{self, DragPan},
    rendering::{self, CanvasPainter},
    ui,
};

/// Conway's Game of Life on an unbounded grid
#[derive(Parser, Debug)]
#[command(name = "sparse_life", version)]
struct Cli {
    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generations per second
    #[arg(long)]
    fps: Option<f32>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<f32>,

    /// Start running instead of paused
    #[arg(long)]
    run: bool,

    /// Write the default config to this path and exit
    #[arg(long, value_name = "PATH")]
    init: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> sparse_life::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(fps) = self.fps {
            config.simulation.fps = fps;
        }
        if let Some(cell_size) = self.cell_size {
            config.display.cell_size = cell_size;
        }
        config.simulation.running |= self.run;
        config.validate()?;
        Ok(config)
    }
}

fn window_conf() -> Conf {
    let display = Cli::parse()
        .load_config()
        .map(|c| c.display)
        .unwrap_or_default();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: display.window_width,
        window_height: display.window_height,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = run(Cli::parse()).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &cli.init {
        Config::default().save(path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = cli.load_config()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str())).init();
    match &cli.config {
        Some(path) => log::info!("config loaded from {}", path.display()),
        None => log::info!("using default config"),
    }

    let mut state = GameState::from_config(&config, ui::grid_area_width(), ui::grid_area_height())?;
    let mut painter = CanvasPainter::new(ui::grid_area_width() as u16, ui::grid_area_height() as u16);
    let mut drag = DragPan::default();
    log::info!(
        "starting at {} gen/s, {}",
        state.scheduler.updates_per_second(),
        if state.is_running() { "running" } else { "paused" }
    );

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        state.resize(ui::grid_area_width(), ui::grid_area_height());
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_zoom(&mut state);
        drag.update(&mut state, mouse_pos);
        input::handle_cell_toggle(&mut state, mouse_pos);
        state = input::process_keyboard_input(state);

        state = state.tick(get_frame_time());

        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        state.present(&mut painter);
        painter.draw();
        rendering::draw_controls(&state, &buttons, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
