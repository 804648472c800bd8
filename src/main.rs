// sortty: step-recording sorting visualizer

use std::fs::OpenOptions;
use std::io::{self, Write};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use sortty::config::{Cli, Config, Mode};
use sortty::model::{ArrayGenerator, Element};
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::try_from(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config)?;

    let mut generator = config.generator();
    tracing::info!(seed = generator.seed(), "random seed");
    let input = config.input(&mut generator);

    match config.mode {
        Mode::Print => print_trace(&config, &input),
        Mode::Tui => run_tui(&config, generator, input),
    }
}

/// Logs go to `--log-file`, to stderr in print mode, and nowhere otherwise
/// since the TUI owns the terminal.
fn init_logging(config: &Config) -> io::Result<()> {
    let writer = match (&config.log_file, config.mode) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(file)
        }
        (None, Mode::Print) => BoxMakeWriter::new(io::stderr),
        (None, Mode::Tui) => BoxMakeWriter::new(io::sink),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(())
}

fn print_trace(config: &Config, input: &[Element]) -> Result<(), Box<dyn std::error::Error>> {
    let trace = config.algorithm.trace(input);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{} ({} steps)", config.algorithm, trace.len())?;
    for (i, step) in trace.iter().enumerate() {
        writeln!(out, "{:>5}  {}  {}", i, step.snapshot, step.description)?;
    }

    let values: Vec<u32> = input.iter().map(|e| e.value).collect();
    if let Err(e) = trace.verify(&values) {
        tracing::warn!(error = %e, "trace verification failed");
        return Err(e.into());
    }

    Ok(())
}

fn run_tui(
    config: &Config,
    generator: ArrayGenerator,
    input: Vec<Element>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config, generator, input);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
