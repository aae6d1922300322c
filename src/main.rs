use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use scrollbar::app::App;
use scrollbar::config::{self, ConfigResult};

/// Scroll bar playground
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Scroll bar playground: drag, page and step through a generated list"
)]
struct Args {
    /// Number of generated list items
    #[arg(long, default_value_t = 500)]
    items: u32,

    /// Width of every generated line, in columns
    #[arg(long, default_value_t = 160)]
    width: u32,

    /// Items moved per step (overrides the config file)
    #[arg(long)]
    step: Option<u32>,

    /// Config file to use instead of ~/.config/scrollbar/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/scrollbar-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/scrollbar-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== SCROLLBAR DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    // An explicit config must load, the default location only warns
    let mut config_result = match &args.config {
        Some(path) => ConfigResult {
            config: config::load_config_from_path(path)?,
            warning: None,
        },
        None => config::load_config(),
    };
    if let Some(step) = args.step {
        config_result.config.scroll.step_size = step.max(1);
    }

    let terminal = init_terminal()?;

    let app = App::new(&config_result.config, args.items, args.width);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== SCROLLBAR DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    app.warning = config_result.warning;

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
