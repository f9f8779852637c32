//! OptAlpha - the OptAlpha marketing site in the terminal.
//!
//! Browse the six pages of the site and send a message through the
//! contact form. Submissions go to the configured backend table, or to a
//! local JSON Lines outbox when no backend is configured.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use optalpha_site::application::{App, AppMode};
use optalpha_site::domain::Page;
use optalpha_site::infrastructure::{Config, ContactStore, JsonLinesStore, RestContactStore, init_logging};
use optalpha_site::presentation::{InputHandler, render_ui};

/// OptAlpha site in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to ./optalpha.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page to open first, as a route such as /about or /contact
    #[arg(short, long, value_parser = parse_page, default_value = "/")]
    page: Page,

    /// Write submissions to this local file instead of the backend
    #[arg(long)]
    outbox: Option<PathBuf>,

    /// Log file, overriding the config
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_page(route: &str) -> Result<Page, String> {
    Page::from_path(route).ok_or_else(|| {
        let known: Vec<&str> = Page::ALL.iter().map(|p| p.path()).collect();
        format!("unknown page '{route}', expected one of {}", known.join(", "))
    })
}

/// Picks the REST backend when a URL is configured, otherwise the outbox.
fn open_store(config: &Config, force_outbox: bool) -> Result<Arc<dyn ContactStore>, Box<dyn std::error::Error>> {
    if !force_outbox {
        if let Some(rest) = RestContactStore::from_config(&config.backend)? {
            tracing::info!(endpoint = rest.endpoint(), "using backend table");
            return Ok(Arc::new(rest));
        }
        tracing::warn!("no backend url configured, falling back to the outbox");
    }
    let outbox = JsonLinesStore::new(config.outbox.file.clone());
    tracing::info!(path = %outbox.path().display(), "writing submissions to the outbox");
    Ok(Arc::new(outbox))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    config.apply_env();
    let force_outbox = args.outbox.is_some();
    if let Some(outbox) = args.outbox {
        config.outbox.file = outbox;
    }
    if let Some(log_file) = args.log_file {
        config.logging.file = log_file;
    }
    init_logging(&config.logging)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let store = open_store(&config, force_outbox)?;
    let mut app = App::new(store, config.ui.toast_lifetime());
    app.navigate(args.page);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal error");
        println!("{err:?}");
    }

    tracing::info!("exiting");
    Ok(())
}

/// Main application event loop.
///
/// Redraws on every key press and every tick so toasts expire and finished
/// submissions are picked up while the user is idle.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &Config) -> io::Result<()> {
    let tick_rate = config.ui.tick_rate();
    loop {
        let mut metrics = None;
        terminal.draw(|f| metrics = Some(render_ui(f, app)))?;
        if let Some(metrics) = metrics {
            app.update_viewport_size(metrics.body_rows, metrics.content_rows);
            if let Some(line) = metrics.focus_line {
                app.ensure_line_visible(line);
            }
            if let Some(max) = metrics.help_max_scroll {
                app.set_help_max_scroll(max);
            }
        }

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                        KeyCode::Char('q') if matches!(app.mode, AppMode::Browse) => return Ok(()),
                        _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                    }
                }
            }
        }

        app.tick(Instant::now());
    }
}
