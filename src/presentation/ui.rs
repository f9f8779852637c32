use crate::application::{App, AppMode, FormStatus, ToastKind};
use crate::domain::{BRAND, Page};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};

use super::sections::{ACCENT, HIGHLIGHT, build_page, wrap_text};

/// Body dimensions measured while drawing, fed back into the app state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportMetrics {
    pub body_rows: usize,
    pub content_rows: usize,
    /// Line holding the focused form control, while the form has focus.
    pub focus_line: Option<usize>,
    /// Largest useful help scroll offset, while the help popup is open.
    pub help_max_scroll: Option<usize>,
}

pub fn render_ui(f: &mut Frame, app: &App) -> ViewportMetrics {
    let header_height = if app.is_scrolled() { 1 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    let mut metrics = render_page(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);
    render_toasts(f, app, chunks[1]);

    if matches!(app.mode, AppMode::Help) {
        metrics.help_max_scroll = Some(render_help_popup(f, app.help_scroll));
    }
    metrics
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.nav_label())))
        .collect();

    if app.is_scrolled() {
        // Compact bar once the page has been scrolled.
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(11), Constraint::Min(0)])
            .split(area);
        let brand = Paragraph::new(Span::styled(
            format!(" {BRAND}"),
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(Color::Black));
        let tabs = Tabs::new(titles)
            .select(app.page.index())
            .style(Style::default().fg(Color::Gray).bg(Color::Black))
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED));
        f.render_widget(brand, cols[0]);
        f.render_widget(tabs, cols[1]);
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(30),
        ])
        .split(area);

    let brand = Paragraph::new(Span::styled(
        format!("◆ {BRAND}"),
        Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::TOP | Borders::BOTTOM | Borders::LEFT));
    let tabs = Tabs::new(titles)
        .select(app.page.index())
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED));
    let ctas = Paragraph::new(Line::from(vec![
        Span::styled("[c] Contact Us ", Style::default().fg(HIGHLIGHT)),
        Span::styled(
            "[d] Request Demo",
            Style::default().fg(Color::Black).bg(HIGHLIGHT),
        ),
    ]))
    .block(Block::default().borders(Borders::TOP | Borders::BOTTOM | Borders::RIGHT));

    f.render_widget(brand, cols[0]);
    f.render_widget(tabs, cols[1]);
    f.render_widget(ctas, cols[2]);
}

fn render_page(f: &mut Frame, app: &App, area: Rect) -> ViewportMetrics {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} · {} ", app.page.nav_label(), app.page.path()));
    let inner = block.inner(area);
    let view = build_page(app, inner.width);

    let body_rows = inner.height as usize;
    let content_rows = view.lines.len();
    let scroll = app.scroll().min(content_rows.saturating_sub(body_rows));

    let paragraph = Paragraph::new(view.lines).block(block).scroll((scroll as u16, 0));
    f.render_widget(paragraph, area);

    let in_form = app.mode == AppMode::Form;
    if in_form && app.form_editable() {
        if let Some((line, col)) = view.cursor {
            if line >= scroll && line < scroll + body_rows {
                f.set_cursor_position(Position::new(inner.x + col, inner.y + (line - scroll) as u16));
            }
        }
    }

    ViewportMetrics {
        body_rows,
        content_rows,
        focus_line: if in_form { view.focus_line } else { None },
        help_max_scroll: None,
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Browse => format!(
            "Tab/←→: pages | 1-6: jump | j/k PgUp/PgDn: scroll | Enter: follow | c/d: contact | y: copy email | ?: help | q: quit | {}",
            app.store_description()
        ),
        AppMode::Form if app.status == FormStatus::Submitting => "Sending...".to_string(),
        AppMode::Form if app.status == FormStatus::Submitted => {
            "Enter: send another message | Esc: back to browsing".to_string()
        }
        AppMode::Form => {
            "Tab/↓: next | Shift+Tab/↑: previous | Enter: next/newline/send | Ctrl+S: send | Esc: stop editing".to_string()
        }
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Browse => Style::default(),
            AppMode::Form => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(ACCENT),
        });
    f.render_widget(status, area);
}

/// Stacks live toasts in the top-right corner of `area`, oldest first.
fn render_toasts(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width.saturating_sub(2).min(56);
    if width < 10 {
        return;
    }
    let x = area.x + area.width - width - 1;
    let mut y = area.y + 1;

    for toast in app.toasts.iter() {
        let rows = wrap_text(&toast.message, usize::from(width - 4));
        let height = rows.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }
        let (color, title) = match toast.kind {
            ToastKind::Success => (Color::Green, " ✓ "),
            ToastKind::Error => (Color::Red, " ✗ "),
        };
        let rect = Rect { x, y, width, height };
        let body = Paragraph::new(rows.join("\n"))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(color)),
            )
            .style(Style::default().fg(Color::White));
        f.render_widget(Clear, rect);
        f.render_widget(body, rect);
        y += height;
    }
}

/// Draws the help popup and returns the largest scroll offset that still fills it.
fn render_help_popup(f: &mut Frame, scroll: usize) -> usize {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let max_scroll = help_lines.len().saturating_sub(visible_height);
    let start_line = scroll.min(max_scroll);
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{BRAND} Keys (Line {}/{})", start_line + 1, help_lines.len()))
                .style(Style::default().fg(ACCENT)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
    max_scroll
}

fn get_help_text() -> String {
    r#"BROWSING
  Tab / → / l          Next page
  Shift+Tab / ← / h    Previous page
  1 - 6                Home, About, Solutions, Technology, Why OptAlpha, Contact
  j / ↓                Scroll down one line
  k / ↑                Scroll up one line
  PgDn / Space         Scroll down one screen
  PgUp                 Scroll up one screen
  Home / g             Back to the top
  End / G              Jump to the bottom
  Enter                Follow the page's first call to action
  c                    Contact page
  d                    Request a demo (opens the contact form)
  y                    Copy contact@optalpha.com to the clipboard
  ? / F1               This help
  q / Ctrl+C           Quit

CONTACT FORM
  Type                 Edit the focused field
  Tab / ↓              Next field
  Shift+Tab / ↑        Previous field
  ← → Home End         Move the cursor
  Backspace / Del      Delete
  Enter                Next field; newline in Message; send on the button
  Ctrl+S               Send from any field
  Esc                  Stop editing

  First name, last name, email, subject and message are required.
  Company is optional. Input is trimmed before it is checked.
  After a successful send, Enter starts another message.

HELP
  ↑↓ / j k             Scroll
  PgUp / PgDn          Fast scroll
  Home                 Top
  Esc / q / ?          Close"#
        .to_string()
}
