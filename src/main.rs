// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]

mod app;
mod config;
mod input;
mod logging;
mod nav;
mod ui;

use app::{App, AppMode, Navigable};
use color_eyre::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use std::{
    io,
    time::{Duration, Instant},
};

const POLL_INTERVAL: Duration = Duration::from_millis(80);

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // Check for command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let force_settings = match args.get(1).map(String::as_str) {
        None => false,
        Some("settings") => true,
        Some(_) => return handle_cli_args(&args),
    };

    let _logging = logging::init();

    // Load config; a broken file is reported before the terminal is taken over
    let config = config::Config::load()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    // Release events drive the button highlight where the terminal reports them
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    if force_settings {
        app.enter_settings_mode(None);
    } else {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        if let Err(err) = app.init_console(area, ui::geometry(area)) {
            app.enter_settings_mode(Some(err.to_string()));
        }
    }
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn handle_cli_args(args: &[String]) -> Result<()> {
    let cmd = args
        .get(1)
        .ok_or_else(|| color_eyre::eyre::eyre!("No command provided"))?;
    let program_name = args.first().map_or("joyconsole", String::as_str);

    match cmd.as_str() {
        "--help" | "-h" | "help" => print_help(program_name),
        "--version" | "-v" => println!("joyconsole v{}", env!("CARGO_PKG_VERSION")),
        "config-path" => println!("{}", config::Config::config_path()?.display()),
        cmd_str => {
            eprintln!("Unknown command: {}", cmd_str);
            eprintln!("Run with --help for available commands.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_help(program_name: &str) {
    println!("joyconsole - a handheld console in your terminal");
    println!();
    println!("Usage: {} [command]", program_name);
    println!();
    println!("Commands:");
    println!("  settings     - Open the settings page instead of the console");
    println!("  config-path  - Print the config file location");
    println!("  --help       - Show this help");
    println!("  --version    - Show version");
    println!();
    println!("Run without arguments to start the console.");
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        if app.mode != AppMode::Settings {
            let size = terminal.size()?;
            app.sync_geometry(ui::geometry(Rect::new(0, 0, size.width, size.height)));
        }

        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        // Poll for events with a timeout
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press
                        && key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.should_quit = true;
                        continue;
                    }

                    match app.mode {
                        AppMode::Console => handle_console_mode(app, key),
                        AppMode::Help => handle_help_mode(app, key),
                        AppMode::Settings => handle_settings_mode(app, key),
                    }
                }
                Event::Mouse(mouse) => {
                    if app.mode != AppMode::Console {
                        continue;
                    }
                    if let Some(command) = app.router.decode_mouse(mouse) {
                        app.apply(command);
                    }
                }
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
    }

    Ok(())
}

fn handle_console_mode(app: &mut App, key: KeyEvent) {
    let commands = app.router.decode_key(key, app.search_focused());
    for command in commands {
        app.apply(command);
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?' | 'h' | 'q') => app.close_help(),
        _ => {}
    }
}

fn handle_settings_mode(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Up => app.settings.previous_item(),
        KeyCode::Down => app.settings.next_item(),
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}
