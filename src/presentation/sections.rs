//! Turns page sections into styled, pre-wrapped lines for the page body.
//!
//! Wrapping happens here rather than in the `Paragraph` so the body knows
//! its own height, which scrolling and the header style depend on.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::{App, AppMode, FormFocus, FormStatus};
use crate::domain::{
    Action, BRAND, COPYRIGHT, Card, FOOTER_BLURB, FOOTER_DISCLAIMER, FOOTER_GROUPS, FOOTER_LOCATION, FormField,
    CONTACT_EMAIL, Section, TAGLINE,
};

pub const ACCENT: Color = Color::Cyan;
pub const HIGHLIGHT: Color = Color::LightRed;
const MUTED: Color = Color::Gray;
const FAINT: Color = Color::DarkGray;

/// Rendered body of one page.
pub struct PageView {
    pub lines: Vec<Line<'static>>,
    /// Line and column of the text cursor when the form has focus.
    pub cursor: Option<(usize, u16)>,
    /// Line of the focused form control, kept in view while typing.
    pub focus_line: Option<usize>,
}

pub fn build_page(app: &App, width: u16) -> PageView {
    let width = usize::from(width.max(20));
    let mut view = PageView {
        lines: Vec::new(),
        cursor: None,
        focus_line: None,
    };

    for section in app.page.sections() {
        render_section(&mut view, app, section, width);
        view.lines.push(Line::default());
    }
    render_site_footer(&mut view.lines, width);
    view
}

fn render_section(view: &mut PageView, app: &App, section: &Section, width: usize) {
    let lines = &mut view.lines;
    match *section {
        Section::Hero { eyebrow, title, subtitle, actions, highlights } => {
            push_eyebrow(lines, eyebrow, width);
            push_wrapped(lines, title, width, Style::default().add_modifier(Modifier::BOLD));
            lines.push(Line::default());
            push_wrapped(lines, subtitle, width, Style::default().fg(MUTED));
            if !highlights.is_empty() {
                lines.push(Line::default());
                let text = highlights.iter().map(|h| format!("◆ {h}")).collect::<Vec<_>>().join("   ");
                push_wrapped(lines, &text, width, Style::default().fg(ACCENT));
            }
            if !actions.is_empty() {
                lines.push(Line::default());
                lines.push(action_line(actions));
            }
            lines.push(Line::from(Span::styled("─".repeat(width), Style::default().fg(FAINT))));
        }
        Section::FeatureGrid { eyebrow, title, intro, cards } => {
            if let Some(eyebrow) = eyebrow {
                push_eyebrow(lines, eyebrow, width);
            }
            push_heading(lines, title, width);
            if let Some(intro) = intro {
                push_wrapped(lines, intro, width, Style::default().fg(MUTED));
            }
            push_cards(lines, cards, width);
        }
        Section::Stats { title, stats } => {
            if let Some(title) = title {
                push_heading(lines, title, width);
            }
            let mut spans = Vec::new();
            for (i, stat) in stats.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("  │  ", Style::default().fg(FAINT)));
                }
                spans.push(Span::styled(stat.value, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(stat.label, Style::default().fg(MUTED)));
            }
            lines.push(Line::from(spans));
        }
        Section::Story { eyebrow, title, paragraphs, highlights } => {
            if let Some(eyebrow) = eyebrow {
                push_eyebrow(lines, eyebrow, width);
            }
            push_heading(lines, title, width);
            for paragraph in paragraphs {
                push_wrapped(lines, paragraph, width, Style::default().fg(MUTED));
                lines.push(Line::default());
            }
            push_cards(lines, highlights, width);
        }
        Section::Bullets { title, description, items } => {
            push_heading(lines, title, width);
            push_wrapped(lines, description, width, Style::default().fg(MUTED));
            for item in items {
                lines.push(Line::from(vec![
                    Span::styled("  • ", Style::default().fg(ACCENT)),
                    Span::raw(*item),
                ]));
            }
        }
        Section::Steps { eyebrow, title, intro, steps } => {
            push_eyebrow(lines, eyebrow, width);
            push_heading(lines, title, width);
            push_wrapped(lines, intro, width, Style::default().fg(MUTED));
            lines.push(Line::default());
            for (i, step) in steps.iter().enumerate() {
                let mut spans = vec![
                    Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::Black).bg(ACCENT)),
                    Span::raw(" "),
                    Span::styled(step.title, Style::default().add_modifier(Modifier::BOLD)),
                ];
                if !step.description.is_empty() {
                    spans.push(Span::styled(format!(" — {}", step.description), Style::default().fg(MUTED)));
                }
                lines.push(Line::from(spans));
            }
        }
        Section::Comparison { eyebrow, title, intro, points } => {
            push_eyebrow(lines, eyebrow, width);
            push_heading(lines, title, width);
            push_wrapped(lines, intro, width, Style::default().fg(MUTED));
            lines.push(Line::default());
            for point in points {
                lines.push(Line::from(vec![
                    Span::styled("  ✓ ", Style::default().fg(ACCENT)),
                    Span::raw(*point),
                ]));
            }
        }
        Section::CtaBanner { title, text, actions } => {
            push_heading(lines, title, width);
            push_wrapped(lines, text, width, Style::default().fg(MUTED));
            lines.push(Line::default());
            lines.push(action_line(actions));
        }
        Section::Notice { text } => {
            push_wrapped(
                lines,
                text,
                width,
                Style::default().fg(FAINT).add_modifier(Modifier::ITALIC),
            );
        }
        Section::ContactForm => render_contact_form(view, app, width),
    }
}

fn push_eyebrow(lines: &mut Vec<Line<'static>>, text: &str, width: usize) {
    push_wrapped(
        lines,
        &text.to_uppercase(),
        width,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    );
}

fn push_heading(lines: &mut Vec<Line<'static>>, text: &str, width: usize) {
    push_wrapped(lines, text, width, Style::default().add_modifier(Modifier::BOLD));
}

fn push_cards(lines: &mut Vec<Line<'static>>, cards: &[Card], width: usize) {
    for card in cards {
        lines.push(Line::from(vec![
            Span::styled("▸ ", Style::default().fg(ACCENT)),
            Span::styled(card.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        for row in wrap_text(card.description, width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(format!("  {row}"), Style::default().fg(MUTED))));
        }
    }
}

fn action_line(actions: &[Action]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, action) in actions.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if i == 0 {
            Style::default().fg(Color::Black).bg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        };
        let arrow = if i == 0 { " →" } else { "" };
        spans.push(Span::styled(format!("[ {}{} ]", action.label, arrow), style));
    }
    if !actions.is_empty() {
        spans.push(Span::styled("  (Enter)", Style::default().fg(FAINT)));
    }
    Line::from(spans)
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    for row in wrap_text(text, width) {
        lines.push(Line::from(Span::styled(row, style)));
    }
}

fn render_site_footer(lines: &mut Vec<Line<'static>>, width: usize) {
    lines.push(Line::from(Span::styled("═".repeat(width), Style::default().fg(FAINT))));
    lines.push(Line::from(Span::styled(
        BRAND.to_string(),
        Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
    )));
    push_wrapped(lines, FOOTER_BLURB, width, Style::default().fg(MUTED));
    lines.push(Line::from(Span::styled(FOOTER_LOCATION, Style::default().fg(FAINT))));
    lines.push(Line::default());

    for group in FOOTER_GROUPS {
        let links = group.links.iter().map(|l| l.label).collect::<Vec<_>>().join(" · ");
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", group.heading.to_uppercase()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(links, Style::default().fg(MUTED)),
        ]));
    }
    lines.push(Line::from(Span::styled(CONTACT_EMAIL, Style::default().fg(FAINT))));
    lines.push(Line::default());

    let disclaimer = format!("Disclaimer: {FOOTER_DISCLAIMER}");
    push_wrapped(lines, &disclaimer, width, Style::default().fg(FAINT));
    lines.push(Line::from(vec![
        Span::styled(COPYRIGHT, Style::default().fg(FAINT)),
        Span::raw("  "),
        Span::styled(TAGLINE, Style::default().fg(FAINT)),
    ]));
}

fn render_contact_form(view: &mut PageView, app: &App, width: usize) {
    let in_form = app.mode == AppMode::Form;
    let lines = &mut view.lines;

    if app.status == FormStatus::Submitted {
        lines.push(Line::from(Span::styled(
            "✓ Thank You!",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        push_wrapped(
            lines,
            "Your message has been sent successfully. Our team will review your inquiry and get back to you shortly.",
            width,
            Style::default().fg(MUTED),
        );
        lines.push(Line::default());
        let style = if in_form {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(HIGHLIGHT)
        };
        if in_form {
            view.focus_line = Some(lines.len());
        }
        lines.push(Line::from(Span::styled("[ Send Another Message ]  (Enter)", style)));
        return;
    }

    push_heading(lines, "Send Us a Message", width);
    if !in_form {
        lines.push(Line::from(Span::styled(
            "Press Enter to start typing.",
            Style::default().fg(FAINT),
        )));
    }
    lines.push(Line::default());

    let inner = width.saturating_sub(4).max(8);
    for field in FormField::ALL {
        let focused = in_form && app.focus == FormFocus::Field(field);
        let label = match field {
            FormField::Company => format!("{} (Optional)", field.label()),
            FormField::Message => {
                let count = app.form.message.trim().chars().count();
                format!("{}  {}/{}", field.label(), count, field.max_len())
            }
            _ => field.label().to_string(),
        };
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(label, label_style)));

        let bar_style = if focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(FAINT)
        };
        let value = app.form.value(field);
        let field_start = lines.len();

        let (rows, cursor) = if value.is_empty() {
            let rows = vec![Span::styled(field.placeholder().to_string(), Style::default().fg(FAINT))];
            (rows, (0, 0))
        } else if field.is_multiline() {
            let (rows, cursor) = layout_multiline(value, app.cursor_position, inner);
            (rows.into_iter().map(Span::raw).collect(), cursor)
        } else {
            let (row, col) = layout_single_line(value, app.cursor_position, inner);
            (vec![Span::raw(row)], (0, col))
        };

        // Multi-line input always shows at least a few rows.
        let min_rows = if field.is_multiline() { 3 } else { 1 };
        let row_count = rows.len().max(min_rows);
        let mut rows = rows.into_iter();
        for _ in 0..row_count {
            let content = rows.next().unwrap_or_default();
            lines.push(Line::from(vec![Span::styled("│ ", bar_style), content]));
        }

        if focused {
            view.focus_line = Some(field_start + cursor.0);
            view.cursor = Some((field_start + cursor.0, (cursor.1 + 2) as u16));
        }
    }

    lines.push(Line::default());
    let (label, style) = match app.status {
        FormStatus::Submitting => ("[ Sending... ]", Style::default().fg(FAINT)),
        _ if in_form && app.focus == FormFocus::SubmitButton => (
            "[ Send Message ➤ ]",
            Style::default().fg(Color::Black).bg(HIGHLIGHT).add_modifier(Modifier::BOLD),
        ),
        _ => ("[ Send Message ➤ ]", Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)),
    };
    if in_form && app.focus == FormFocus::SubmitButton {
        view.focus_line = Some(lines.len());
    }
    lines.push(Line::from(vec![
        Span::styled(label, style),
        Span::styled("  Ctrl+S to send from any field", Style::default().fg(FAINT)),
    ]));
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Visible window of a single-line value and the cursor column inside it.
///
/// `cursor` is a character index; the returned column is in terminal cells.
pub fn layout_single_line(value: &str, cursor: usize, width: usize) -> (String, usize) {
    let width = width.max(1);
    let chars: Vec<char> = value.chars().collect();
    let cursor = cursor.min(chars.len());

    // Keep one cell free after the text for the cursor itself.
    let mut start = cursor;
    let mut before = 0;
    while start > 0 {
        let w = char_width(chars[start - 1]);
        if before + w > width - 1 {
            break;
        }
        before += w;
        start -= 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for &c in &chars[start..] {
        let w = char_width(c);
        if used + w > width {
            break;
        }
        visible.push(c);
        used += w;
    }
    (visible, before)
}

/// Hard-wraps a multi-line value and locates the cursor as (row, cell column).
pub fn layout_multiline(value: &str, cursor: usize, width: usize) -> (Vec<String>, (usize, usize)) {
    let width = width.max(1);
    let mut rows = vec![String::new()];
    let mut col = 0;
    let mut cursor_at = (0, 0);

    for (i, c) in value.chars().enumerate() {
        if i == cursor {
            cursor_at = (rows.len() - 1, col);
        }
        if c == '\n' {
            rows.push(String::new());
            col = 0;
            continue;
        }
        let w = char_width(c);
        if col > 0 && col + w > width {
            rows.push(String::new());
            col = 0;
            if i == cursor {
                cursor_at = (rows.len() - 1, 0);
            }
        }
        if let Some(row) = rows.last_mut() {
            row.push(c);
        }
        col += w;
    }
    if cursor >= value.chars().count() {
        cursor_at = (rows.len() - 1, col);
    }
    (rows, cursor_at)
}

/// Splits `s` after the last character that still fits in `width` cells.
/// Always keeps at least one character in the head.
fn split_at_width(s: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let w = char_width(c);
        if i > 0 && used + w > width {
            return s.split_at(i);
        }
        used += w;
    }
    (s, "")
}

/// Greedy word wrap on display width. Overlong words are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut rest = word;
        while rest.width() > width {
            if current_width > 0 {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let (head, tail) = split_at_width(rest, width);
            rows.push(head.to_string());
            rest = tail;
        }
        if rest.is_empty() {
            continue;
        }

        let w = rest.width();
        if current_width > 0 && current_width + 1 + w > width {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(rest);
        current_width += w;
    }
    if current_width > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeStore;
    use crate::domain::Page;
    use std::sync::Arc;
    use std::time::Duration;

    fn text_of(view: &PageView) -> String {
        view.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let rows = wrap_text("Trading and investing involve significant risk of loss.", 16);
        assert!(rows.iter().all(|r| r.chars().count() <= 16));
        assert_eq!(rows.join(" "), "Trading and investing involve significant risk of loss.");
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        let rows = wrap_text("abcdefghij xy", 4);
        assert_eq!(rows, vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_text_of_empty_string_is_one_blank_row() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_single_line_window_follows_cursor() {
        let (row, col) = layout_single_line("abcdefghij", 10, 5);
        assert_eq!(row, "ghij");
        assert_eq!(col, 4);

        let (row, col) = layout_single_line("abcdefghij", 2, 5);
        assert_eq!(row, "abcde");
        assert_eq!(col, 2);
    }

    #[test]
    fn test_multiline_layout_tracks_cursor() {
        let (rows, cursor) = layout_multiline("ab\ncdefg", 8, 3);
        assert_eq!(rows, vec!["ab", "cde", "fg"]);
        assert_eq!(cursor, (2, 2));

        let (_, cursor) = layout_multiline("ab\ncd", 3, 3);
        assert_eq!(cursor, (1, 0));
    }

    #[test]
    fn test_wide_characters_are_measured_in_cells() {
        let rows = wrap_text("日本語 テキスト", 6);
        assert_eq!(rows, vec!["日本語", "テキス", "ト"]);
        assert!(rows.iter().all(|r| r.width() <= 6));

        let (row, col) = layout_single_line("日本語テキスト", 7, 6);
        assert_eq!(row, "スト");
        assert_eq!(col, 4);

        let (rows, cursor) = layout_multiline("日本語", 3, 5);
        assert_eq!(rows, vec!["日本", "語"]);
        assert_eq!(cursor, (1, 2));
    }

    #[test]
    fn test_every_page_renders_title_and_footer() {
        let mut app = App::new(Arc::new(FakeStore::accepting()), Duration::from_secs(4));
        for page in Page::ALL {
            app.navigate(page);
            let text = text_of(&build_page(&app, 80));
            assert!(text.contains(COPYRIGHT), "{page:?}");
            assert!(text.contains("Disclaimer:"), "{page:?}");
        }
    }

    #[test]
    fn test_contact_form_shows_placeholders_and_cursor() {
        let mut app = App::new(Arc::new(FakeStore::accepting()), Duration::from_secs(4));
        app.focus_form();
        let view = build_page(&app, 80);
        let text = text_of(&view);
        assert!(text.contains("Send Us a Message"));
        assert!(text.contains("Company (Optional)"));
        assert!(text.contains("john@example.com"));
        assert!(view.cursor.is_some());
        assert_eq!(view.focus_line, view.cursor.map(|(line, _)| line));
    }

    #[test]
    fn test_thank_you_panel_replaces_form() {
        let mut app = App::new(Arc::new(FakeStore::accepting()), Duration::from_secs(4));
        app.focus_form();
        app.form.first_name = "John".to_string();
        app.form.last_name = "Doe".to_string();
        app.form.email = "john@example.com".to_string();
        app.form.subject = "Demo request".to_string();
        app.form.message = "Please contact me".to_string();
        app.submit();
        app.wait_for_submission();

        let text = text_of(&build_page(&app, 80));
        assert!(text.contains("Thank You!"));
        assert!(!text.contains("Send Us a Message"));
    }
}
