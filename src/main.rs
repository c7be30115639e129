use clap::Parser;
use marquee::app::App;
use marquee::config::SiteConfig;
use marquee::terminal::{Terminal, TerminalEvent};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "marquee", about = "Terminal client for the movie site forms")]
struct Cli {
    /// Site configuration file (YAML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured base URL.
    #[arg(long)]
    base_url: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> io::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => SiteConfig::load(path).map_err(io::Error::other)?,
        None => SiteConfig::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    tracing::info!(base_url = %config.base_url, movies = config.movies.len(), "starting");

    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut terminal, &config);

    terminal.show_cursor()?;
    terminal.exit_raw_mode()?;

    result
}

fn event_loop(terminal: &mut Terminal, config: &SiteConfig) -> io::Result<()> {
    let mut app = App::new(config);

    let mut render_requested = true;

    loop {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    if app.handle_key(key_event) {
                        render_requested = true;
                    }
                }
                TerminalEvent::Resize { .. } => {
                    render_requested = true;
                }
            }
        }

        if app.tick() {
            render_requested = true;
        }

        if render_requested {
            terminal.render(&app.render_lines(terminal.size().width))?;
            render_requested = false;
        }

        if app.should_exit() {
            break;
        }
    }

    Ok(())
}
