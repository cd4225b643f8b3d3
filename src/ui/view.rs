use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::types::Module;
use crate::ui::app::WizardApp;
use crate::ui::keybindings::{key_label, SHORTCUTS};

pub fn render(frame: &mut Frame, app: &WizardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Phase stepper
            Constraint::Min(8),    // Modules
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    render_stepper(frame, chunks[0], app);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    render_module_list(frame, main[0], app);
    render_module_detail(frame, main[1], app.selected_module());
    render_status(frame, chunks[2], app);
    render_help(frame, chunks[3]);
}

fn render_stepper(frame: &mut Frame, area: Rect, app: &WizardApp) {
    let wizard = app.wizard();
    let current = wizard.current_phase_index();

    let mut spans = Vec::new();
    for (i, phase) in wizard.phases().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        let (marker, style) = if i < current {
            ("✓", Style::default().fg(Color::Green))
        } else if i == current {
            (
                "●",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default().fg(Color::Gray))
        };
        spans.push(Span::styled(format!("{marker} {}", phase.name), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" EKS Migration ")
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

fn render_module_list(frame: &mut Frame, area: Rect, app: &WizardApp) {
    let modules = app.wizard().modules();

    let items: Vec<ListItem> = modules
        .iter()
        .map(|m| {
            let done = m.steps().iter().filter(|s| s.completed).count();
            let (icon, color) = if m.is_completed() {
                ("✓", Color::Green)
            } else {
                ("○", Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{icon} "), Style::default().fg(color)),
                Span::raw(m.title.clone()),
                Span::styled(
                    format!(" {done}/{}", m.steps().len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let title = match app.wizard().current_phase() {
        Some(phase) => format!("{} ({})", phase.name, modules.len()),
        None => "Modules".to_string(),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !modules.is_empty() {
        state.select(Some(app.selected_index()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_module_detail(frame: &mut Frame, area: Rect, module: Option<&Module>) {
    let block = Block::default().borders(Borders::ALL);

    let Some(module) = module else {
        let empty = Paragraph::new("No modules loaded. Press r to reload.")
            .style(Style::default().fg(Color::Gray))
            .block(block.title("Details"));
        frame.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            module.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
    ];

    let cursor = module.current_step_index();
    for (i, step) in module.steps().iter().enumerate() {
        let (marker, style) = if step.completed {
            ("✓", Style::default().fg(Color::Green))
        } else if i == cursor {
            (
                "▶",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default())
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {}. {}", i + 1, step.name),
            style,
        )));
    }

    if let Some(step) = module.current_step() {
        lines.push(Line::default());
        lines.extend(step.instructions.lines().map(|l| Line::from(l.to_string())));
    }

    let paragraph = Paragraph::new(lines)
        .block(block.title(module.title.clone()))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &WizardApp) {
    let Some(status) = app.status() else {
        return;
    };
    let color = if status.is_error {
        Color::Red
    } else {
        Color::Green
    };
    frame.render_widget(
        Paragraph::new(status.text.clone()).style(Style::default().fg(color)),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let text = SHORTCUTS
        .iter()
        .map(|s| format!("[{}] {}", key_label(s.key), s.label))
        .collect::<Vec<_>>()
        .join("  ");
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::keybindings::Action;
    use crate::wizard::{CatalogSource, Wizard};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &WizardApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        screen_text(&terminal)
    }

    #[tokio::test]
    async fn test_renders_phases_and_modules() {
        let mut app = WizardApp::new(Wizard::default());
        app.reload(&CatalogSource).await;

        let text = draw(&app);
        assert!(text.contains("● Base Layer"));
        assert!(text.contains("○ Data Layer"));
        assert!(text.contains("Core Infrastructure"));
        assert!(text.contains("Cluster Configuration"));
        assert!(text.contains("VPC Setup"));
        assert!(text.contains("[q] quit"));
    }

    #[tokio::test]
    async fn test_completed_phase_gets_check_mark() {
        let mut app = WizardApp::new(Wizard::default());
        app.reload(&CatalogSource).await;
        app.apply(Action::CompleteModule);
        app.apply(Action::SelectNextModule);
        app.apply(Action::CompleteModule);
        app.apply(Action::NextPhase);
        app.reload(&CatalogSource).await;

        let text = draw(&app);
        assert!(text.contains("✓ Base Layer"));
        assert!(text.contains("● Data Layer"));
        assert!(text.contains("Data Storage"));
    }

    #[test]
    fn test_empty_module_list_hint() {
        let app = WizardApp::new(Wizard::default());
        let text = draw(&app);
        assert!(text.contains("No modules loaded"));
    }
}
