//! Interactive picker-plus-panel screen.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{prelude::*, widgets::*};

use crate::app::{PanelUpdate, RefreshStart, Refresher};
use crate::companies::CompanyDirectory;
use crate::error::{AppError, Result};
use crate::present::{QuotePanel, Tone};
use crate::ui::TerminalGuard;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Run the interactive screen: company list on the left, quote panel on the
/// right. Moving the selection triggers a refresh, as does opening the
/// screen. Fetch completions arrive over `rx` and are applied here, the only
/// writer of the panel state.
pub fn run_quote_screen(
    directory: CompanyDirectory,
    refresher: &Refresher,
    rx: &Receiver<PanelUpdate>,
) -> Result<()> {
    if directory.is_empty() {
        return Err(AppError::message("No companies configured"));
    }

    let mut guard = TerminalGuard::new()?;
    let mut selected = 0usize;
    let mut panel = QuotePanel::new();
    let mut offline_alert = false;
    let mut tick = 0usize;

    let trigger = |selected: usize, panel: &mut QuotePanel, offline_alert: &mut bool| {
        let Some(symbol) = directory.symbol_at(selected) else {
            return;
        };
        // Placeholders and the busy marker come back before the connectivity
        // gate; an offline refresh leaves them standing, as the original did.
        panel.reset();
        match refresher.request_update(symbol) {
            RefreshStart::Started => *offline_alert = false,
            RefreshStart::Offline => *offline_alert = true,
        }
    };

    // viewDidAppear equivalent: refresh for the initial selection.
    trigger(selected, &mut panel, &mut offline_alert);

    loop {
        // Stale completions for a superseded selection are applied as they
        // arrive; there is no cancellation.
        while let Ok(update) = rx.try_recv() {
            match update {
                PanelUpdate::Quote(quote) => panel.apply_quote(&quote),
                PanelUpdate::Logo(logo) => panel.apply_logo(logo),
            }
        }

        tick = tick.wrapping_add(1);
        guard.draw(|f| {
            draw_screen(f, &directory, selected, &panel, offline_alert, tick);
        })?;

        let Some(key) = guard.poll_key(Duration::from_millis(150))? else {
            continue;
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                selected = if selected == 0 {
                    directory.len() - 1
                } else {
                    selected - 1
                };
                trigger(selected, &mut panel, &mut offline_alert);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                selected = (selected + 1) % directory.len();
                trigger(selected, &mut panel, &mut offline_alert);
            }
            KeyCode::Char('u') | KeyCode::Enter => {
                trigger(selected, &mut panel, &mut offline_alert);
            }
            KeyCode::Esc => {
                if offline_alert {
                    offline_alert = false;
                } else {
                    break;
                }
            }
            KeyCode::Char('q') => break,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            _ => {}
        }
    }

    guard.restore()?;
    Ok(())
}

fn draw_screen(
    f: &mut Frame,
    directory: &CompanyDirectory,
    selected: usize,
    panel: &QuotePanel,
    offline_alert: bool,
    tick: usize,
) {
    let size = f.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(30)])
        .split(rows[0]);

    draw_company_list(f, directory, selected, columns[0]);
    draw_quote_panel(f, panel, columns[1], tick);

    let help = Paragraph::new("↑/↓ select • u update • q quit")
        .style(Style::default().fg(Color::Gray));
    f.render_widget(help, rows[1]);

    if offline_alert {
        draw_offline_alert(f, size);
    }
}

fn draw_company_list(f: &mut Frame, directory: &CompanyDirectory, selected: usize, area: Rect) {
    let items: Vec<ListItem> = directory
        .entries()
        .enumerate()
        .map(|(idx, (name, symbol))| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<5}", symbol),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(name),
            ]);
            let mut item = ListItem::new(line);
            if idx == selected {
                item = item.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            item
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Companies (↑/↓ or j/k)"),
    );
    f.render_widget(list, area);
}

fn draw_quote_panel(f: &mut Frame, panel: &QuotePanel, area: Rect, tick: usize) {
    let title = if panel.busy {
        format!("Quote {}", SPINNER[tick % SPINNER.len()])
    } else {
        "Quote".to_string()
    };

    let mut lines = vec![
        field_line("Company ", &panel.company_name, Tone::Flat),
        field_line("Symbol  ", &panel.symbol, Tone::Flat),
        field_line("Price   ", &panel.price, Tone::Flat),
        field_line("Change  ", &panel.change, panel.change_tone),
        field_line("Change %", &panel.change_percent, panel.change_percent_tone),
    ];

    lines.push(Line::raw(""));
    match &panel.logo {
        Some(logo) => lines.push(Line::from(vec![
            Span::raw("Logo    "),
            Span::styled(
                format!("{} ({} bytes)", logo.source_url, logo.bytes.len()),
                Style::default().fg(Color::Gray),
            ),
        ])),
        None => lines.push(field_line("Logo    ", "-", Tone::Flat)),
    }

    if let Some(as_of) = panel.as_of {
        lines.push(Line::from(Span::styled(
            format!("as of {}", as_of.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}

fn field_line(label: &str, value: &str, tone: Tone) -> Line<'static> {
    let style = match tone_color(tone) {
        Some(color) => Style::default().fg(color),
        None => Style::default(),
    };
    Line::from(vec![
        Span::raw(format!("{}  ", label)),
        Span::styled(value.to_string(), style),
    ])
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Down => Some(Color::Red),
        Tone::Up => Some(Color::Green),
        Tone::Flat => None,
    }
}

fn draw_offline_alert(f: &mut Frame, size: Rect) {
    let width = 44.min(size.width);
    let height = 5.min(size.height);
    let area = Rect {
        x: size.width.saturating_sub(width) / 2,
        y: size.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let alert = Paragraph::new(vec![
        Line::raw("Network connection failed"),
        Line::raw(""),
        Line::from(Span::styled(
            "[u] Update   [Esc] Dismiss",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Error")
            .style(Style::default().fg(Color::Red)),
    );

    f.render_widget(Clear, area);
    f.render_widget(alert, area);
}
