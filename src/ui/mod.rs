//! Terminal front end for the migration wizard.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

use crate::config::Config;
use crate::wizard::{ModuleSource, Wizard};

pub mod app;
pub mod keybindings;
pub mod terminal_guard;
mod view;

pub use app::{Effect, StatusLine, WizardApp};
pub use terminal_guard::{install_panic_hook, TerminalSession};

/// Run the wizard until the user quits.
///
/// Modules are fetched from `source` on start and after every phase change.
pub async fn run<S>(config: &Config, source: &S) -> Result<()>
where
    S: ModuleSource + ?Sized,
{
    install_panic_hook();
    let mut session = TerminalSession::enter()?;

    let mut app = WizardApp::new(Wizard::default());
    app.reload(source).await;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    loop {
        session.terminal().draw(|f| view::render(f, &app))?;

        if !event::poll(tick_rate)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = keybindings::action_for(key.code) else {
            continue;
        };

        tracing::debug!(?action, "Key action");
        match app.apply(action) {
            Effect::None => {}
            Effect::Reload => app.reload(source).await,
            Effect::Quit => break,
        }
    }

    Ok(())
}
