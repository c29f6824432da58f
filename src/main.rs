use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use vkeys::cli::{CliArgs, Command, LegendArgs};
use vkeys::config::Settings;
use vkeys::keymap::{
    dump_defaults, CommandInput, Dispatch, InputReader, Keymap, TerminalInput, VirtualKey,
};
use vkeys::legend::{Legend, LegendEntry, TerminalSurface, TextGrid};

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();
    // Console logging would tear through the interactive screen
    let console = !matches!(args.command, Command::Keys);
    vkeys::tracing::init(args.verbose, console);

    let settings = Settings::load();
    let keys_path = args.keys.clone().or_else(|| settings.keys_path());

    match args.command {
        Command::Defaults => {
            let mut out = io::stdout().lock();
            dump_defaults(&mut out).context("Failed to write defaults")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Show => {
            let keymap = load_keymap(keys_path)?;
            let mut out = io::stdout().lock();
            keymap.save(&mut out).context("Failed to write bindings")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => check(keys_path),
        Command::Legend(legend_args) => {
            let keymap = load_keymap(keys_path)?;
            print_legend(&keymap, &legend_args, settings.legend_columns)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Keys => {
            let keymap = load_keymap(keys_path)?;
            run_keys(&keymap, settings.legend_columns)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn require_path(path: Option<PathBuf>) -> Result<PathBuf> {
    path.ok_or_else(|| anyhow!("No config directory available, pass --keys <PATH>"))
}

fn load_keymap(path: Option<PathBuf>) -> Result<Keymap> {
    let path = require_path(path)?;
    let (keymap, report) = Keymap::load_or_create(&path)
        .with_context(|| format!("Failed to set up keys from {}", path.display()))?;
    for issue in &report.issues {
        eprintln!("{}: {}", path.display(), issue);
    }
    if let Some(e) = &report.rejected {
        eprintln!("{}: ignored, using the default keys: {}", path.display(), e);
    }
    Ok(keymap)
}

fn check(path: Option<PathBuf>) -> Result<ExitCode> {
    let path = require_path(path)?;
    let mut keymap = Keymap::new();
    let report = keymap
        .load_file(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    for issue in &report.issues {
        println!("{}: {}", path.display(), issue);
    }
    for vkey in VirtualKey::ALL {
        if keymap.is_missing(vkey) {
            println!("missing: {} (default: {})", vkey, vkey.default_binding());
        } else if keymap.is_undefined(vkey) {
            println!("undefined: {}", vkey);
        }
    }

    if let Err(e) = keymap.check_fill() {
        println!("The defaults cannot be filled in, the whole file will be ignored: {}", e);
        return Ok(ExitCode::FAILURE);
    }
    if keymap.check_missing() {
        println!("Some actions have no binding and will get their default keys");
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn print_legend(keymap: &Keymap, args: &LegendArgs, max_columns: usize) -> Result<()> {
    let entries = args.entries().map_err(|e| anyhow!(e))?;
    let legend = Legend::new(&entries, args.width, max_columns);
    let page = args.page % legend.page_count();

    let mut grid = TextGrid::new(args.width);
    legend.render(keymap, page, &mut grid)?;
    for line in grid.lines() {
        println!("{}", line);
    }
    println!("(page {}/{})", page + 1, legend.page_count());
    Ok(())
}

/// Restores the terminal when the interactive session ends
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {}", e);
        }
    }
}

fn describe(keymap: &Keymap, input: &CommandInput) -> String {
    let what = match input.dispatch {
        Dispatch::Action(vkey) => format!("{} ({})", vkey, vkey.description()),
        Dispatch::Resize => "terminal resized".to_string(),
        Dispatch::Unbound(key) => format!(
            "key '{}' is not bound",
            keymap.name_of(key).unwrap_or_else(|| key.to_string())
        ),
    };
    format!("{}  count={} register={}", what, input.count, input.register)
}

fn draw(
    keymap: &Keymap,
    entries: &[LegendEntry],
    page: usize,
    status: &str,
    max_columns: usize,
) -> Result<usize> {
    let (width, height) = terminal::size().context("Failed to query terminal size")?;
    let legend = Legend::new(entries, width as usize, max_columns);
    let page = page % legend.page_count();

    let mut out = io::stdout().lock();
    queue!(out, Clear(ClearType::All), MoveTo(0, 0), Print(status))?;
    let top = height.saturating_sub(2);
    let mut surface = TerminalSurface::new(&mut out, top);
    legend.render(keymap, page, &mut surface)?;
    surface.flush()?;
    Ok(page)
}

fn run_keys(keymap: &Keymap, max_columns: usize) -> Result<()> {
    let entries: Vec<LegendEntry> = VirtualKey::ALL
        .iter()
        .copied()
        .map(LegendEntry::from)
        .collect();
    let _guard = RawModeGuard::enable()?;

    let quit = keymap.first_key(VirtualKey::Quit);
    let mut status = format!(
        "Press keys (with optional count and \"register prefix), {} quits",
        quit
    );
    let mut page = draw(keymap, &entries, 0, &status, max_columns)?;

    let mut reader = InputReader::new(TerminalInput::new());
    while let Some(input) = reader.next_command(keymap, true) {
        tracing::debug!("Resolved {:?}", input);
        match input.dispatch {
            Dispatch::Action(VirtualKey::Quit) => break,
            Dispatch::Action(VirtualKey::OtherCmd) => page += 1,
            _ => {}
        }
        status = describe(keymap, &input);
        page = draw(keymap, &entries, page, &status, max_columns)?;
    }

    io::stdout().flush()?;
    Ok(())
}
