//! Trackview - a terminal viewer for GPS track logs.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use trackview::app::App;
use trackview::data::TrackReader;
use trackview::ui;
use trackview::util::summary_text;

#[derive(Parser, Debug)]
#[command(name = "trackview")]
#[command(about = "A terminal viewer for GPS track logs", long_about = None)]
struct Args {
    /// Path to the track log to open
    file: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print a text summary instead of starting the viewer
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Trackview");
    }

    if !args.file.exists() {
        eprintln!("Error: Path not found: {}", args.file.display());
        std::process::exit(1);
    }

    let tracks = match TrackReader::read_file(&args.file) {
        Ok(tracks) => tracks,
        Err(e) => {
            tracing::error!("Error loading file: {}", e);
            return Err(e).with_context(|| format!("Failed to read {}", args.file.display()));
        },
    };

    if args.summary {
        print!("{}", summary_text(&tracks));
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.file, tracks);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    report_exit(res)
}

/// Report how the viewer ended; the terminal must already be restored.
fn report_exit(res: Result<()>) -> Result<()> {
    match &res {
        Ok(()) => tracing::info!("Trackview exited"),
        Err(e) => tracing::error!("Viewer failed: {:#}", e),
    }
    res.context("Viewer failed")
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Views
                    (KeyModifiers::NONE, KeyCode::Tab) => app.cycle_view_mode(),

                    // Track selection
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => app.select_next_track(),
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => app.select_prev_track(),
                    (KeyModifiers::NONE, KeyCode::Esc) => app.clear_selection(),

                    // Appearance
                    (KeyModifiers::NONE, KeyCode::Char('c')) => app.cycle_color_palette(),
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                    (KeyModifiers::SHIFT, KeyCode::Char('?'))
                    | (KeyModifiers::NONE, KeyCode::Char('?')) => app.show_help(),

                    _ => {},
                }
            }
        }
    }
}
