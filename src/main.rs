use chrono::Local;
use clap::Parser;
use regform::app::App;
use regform::config::Config;
use regform::error::AppError;
use regform::logging;
use regform::submit::SimulatedSubmitter;
use regform::terminal::{Terminal, TerminalEvent};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "regform", version, about = "Interactive registration form")]
struct Cli {
    /// YAML config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Delay before a valid form is handed to the submitter.
    #[arg(long, value_name = "MS")]
    submit_delay_ms: Option<u64>,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Exit after the first successful submission.
    #[arg(long)]
    once: bool,

    /// Print submitted registrations as JSON on exit.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(delay) = cli.submit_delay_ms {
        config.submit_delay_ms = delay;
    }
    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    }
    logging::init(&config)?;
    info!(?config, "starting");

    let today = Local::now().date_naive();
    let app = App::new(config.timing(), today, SimulatedSubmitter::new())
        .with_exit_after_success(cli.once);

    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;
    terminal.set_line_wrap(false)?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut terminal, app);

    terminal.show_cursor()?;
    terminal.set_line_wrap(true)?;
    terminal.exit_raw_mode()?;

    let app = result?;
    info!(count = app.submitted().len(), "exiting");
    if cli.json {
        println!("{}", serde_json::to_string_pretty(app.submitted())?);
    }
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal,
    mut app: App<SimulatedSubmitter>,
) -> Result<App<SimulatedSubmitter>, AppError> {
    let mut render_requested = true;

    loop {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    app.handle_key(key_event);
                    render_requested = true;
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
            app.render(terminal)?;
            render_requested = false;
        }

        if app.should_exit() {
            break;
        }
    }

    app.renderer.move_to_end(terminal)?;
    terminal.clear_from_cursor_down()?;

    Ok(app)
}
