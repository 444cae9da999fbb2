use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use kurbo::{BezPath, PathSeg};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Paragraph};

use outline_morph::sampler::FRAME_SIZE;
use outline_morph::{
    shapes, Direction, MorphConfig, MorphEngine, Outline, Renderer, RestartFrom, ShapeLibrary,
};

/// Terminal playground for outline morphing.
#[derive(Debug, Parser)]
struct Args {
    /// Points per outline.
    #[arg(long, default_value_t = 72)]
    samples: usize,

    /// Transition length in milliseconds.
    #[arg(long, default_value_t = 500)]
    duration_ms: u64,

    #[arg(long)]
    reduced_motion: bool,

    /// Sample at half resolution.
    #[arg(long)]
    compact: bool,

    #[arg(long, value_enum, default_value_t = Restart::Library)]
    restart: Restart,

    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// SVG path data to morph between instead of the built-in shapes.
    /// Repeatable; degenerate outlines are skipped.
    #[arg(long = "shape")]
    shapes: Vec<String>,

    /// Defaults to a file in the system temp dir; the terminal belongs to the UI.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Restart {
    Library,
    Snapshot,
}

impl From<Restart> for RestartFrom {
    fn from(restart: Restart) -> Self {
        match restart {
            Restart::Library => Self::Library,
            Restart::Snapshot => Self::Snapshot,
        }
    }
}

/// Keeps the most recent outline for the next terminal draw.
#[derive(Default)]
struct CanvasRenderer {
    path: BezPath,
}

impl Renderer for CanvasRenderer {
    type Error = anyhow::Error;

    fn render(&mut self, path: &str) -> anyhow::Result<()> {
        self.path = BezPath::from_svg(path).context("engine emitted unreadable path data")?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let engine = build_engine(&args)?;

    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

    let result = run(engine, args.fps);

    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("outline-morph-harness.log"));
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

fn build_engine(args: &Args) -> anyhow::Result<MorphEngine> {
    let config = MorphConfig {
        sample_count: args.samples,
        duration: Duration::from_millis(args.duration_ms),
        restart: args.restart.into(),
        reduced_motion: args.reduced_motion,
        compact_layout: args.compact,
        ..MorphConfig::default()
    };

    if args.shapes.is_empty() {
        return Ok(MorphEngine::new(shapes::all(), config)?);
    }

    let outlines = args
        .shapes
        .iter()
        .map(|data| Outline::parse(data))
        .collect::<Result<Vec<_>, _>>()?;

    let library =
        ShapeLibrary::build_lenient(outlines, config.effective_sample_count(), config.winding)?;
    log::info!("loaded {} of {} custom shapes", library.len(), args.shapes.len());

    Ok(MorphEngine::with_library(library, config))
}

fn run(mut engine: MorphEngine, fps: u32) -> anyhow::Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let frame_interval = Duration::from_secs(1) / fps.max(1);
    let mut renderer = CanvasRenderer::default();
    renderer.render(&engine.current_path_data())?;

    loop {
        engine.drive(Instant::now(), &mut renderer)?;
        terminal.draw(|f| draw(f, &engine, &renderer.path))?;

        // Block on input only while nothing is animating.
        let timeout = if engine.is_transitioning() {
            frame_interval
        } else {
            Duration::from_secs(60)
        };

        if !event::poll(timeout)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,

                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                    engine.advance(Direction::Forward);
                }

                KeyCode::Left => {
                    engine.advance(Direction::Backward);
                }

                _ => continue,
            }
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, engine: &MorphEngine, path: &BezPath) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(f.area());

    let status = match engine.progress() {
        Some(t) => format!("morphing {:>3.0}%", t * 100.0),
        None => "idle".to_string(),
    };

    f.render_widget(
        Paragraph::new(format!(
            "outline-morph  [←/→ cycle shapes]  [q quit]  shape {}/{}  {status}",
            engine.cursor() + 1,
            engine.library().len().max(1),
        ))
        .style(Style::new().fg(Color::DarkGray)),
        chunks[0],
    );

    let canvas = Canvas::default()
        .block(Block::bordered())
        .marker(Marker::Braille)
        .x_bounds([0.0, FRAME_SIZE])
        .y_bounds([0.0, FRAME_SIZE])
        .paint(|ctx| {
            for seg in path.segments() {
                if let PathSeg::Line(line) = seg {
                    // Canvas y grows upward; outline y grows downward.
                    ctx.draw(&CanvasLine::new(
                        line.p0.x,
                        FRAME_SIZE - line.p0.y,
                        line.p1.x,
                        FRAME_SIZE - line.p1.y,
                        Color::Rgb(120, 200, 255),
                    ));
                }
            }
        });

    f.render_widget(canvas, chunks[1]);
}
