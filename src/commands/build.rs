//! Build command implementation
//!
//! Runs the interactive builder on the alternate screen and prints the
//! final quote once the user quits.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};

use flexi_plan::{config::Config, session::Session, ui::BuilderApp};

use crate::commands::quote::print_quote;

/// Execute the build command
pub fn execute(cfg: &Config) -> Result<()> {
    let session = Session::new(Arc::new(cfg.catalog.clone()));
    let mut app = BuilderApp::new(session, cfg.display.currency_symbol.clone());

    run_builder(&mut app)?;

    print_quote(&app.session.quote(), &cfg.display.currency_symbol);
    if let Some(confirmation) = &app.session.view().confirmation {
        println!(
            "  Confirmed at {}",
            confirmation.at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    Ok(())
}

fn run_builder(app: &mut BuilderApp) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    // Main loop
    let result = loop {
        if let Err(e) = terminal.draw(|f| app.render(f)) {
            break Err(e.into());
        }

        match event::poll(Duration::from_millis(250)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) {
                        break Ok(());
                    }
                }
                Ok(_) => {}
                Err(e) => break Err(e.into()),
            },
            Ok(false) => {}
            Err(e) => break Err(e.into()),
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
