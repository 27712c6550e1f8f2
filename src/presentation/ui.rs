use crate::application::{App, AppMode, Focus, NotificationKind, Toast};
use crate::domain::{Field, FieldKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

const ACCENT: Color = Color::Magenta;
const SUBMIT_HINT: &str = "Fill all required fields to submit";

pub fn render_ui(f: &mut Frame, app: &App) {
    let shell = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = shell.inner(f.area());
    f.render_widget(shell, f.area());

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(3)];
    constraints.extend(Field::ALL.iter().map(|field| Constraint::Length(field_height(*field))));
    constraints.extend([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    render_header(f, chunks[0]);
    render_progress(f, app, chunks[1]);
    for (i, field) in Field::ALL.into_iter().enumerate() {
        render_field(f, app, field, chunks[2 + i]);
    }
    let after_fields = 2 + Field::ALL.len();
    render_submit_button(f, app, chunks[after_fields]);
    render_status_bar(f, app, chunks[after_fields + 2]);

    if let Some(toast) = &app.toast {
        render_toast(f, toast);
    }

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn field_height(field: Field) -> u16 {
    match field.kind() {
        FieldKind::TextArea => 6,
        _ => 3,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Job Application Form")
        .alignment(Alignment::Center)
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    f.render_widget(header, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let progress = app.form.progress();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Form Progress"))
        .gauge_style(Style::default().fg(ACCENT).bg(Color::Black))
        .ratio(progress.ratio())
        .label(format!("{}%", progress.rounded()));
    f.render_widget(gauge, area);
}

fn render_field(f: &mut Frame, app: &App, field: Field, area: Rect) {
    let focused = app.focus == Focus::Field(field);
    let error = app.form.errors().get(field);
    let value = app.form.value(field);

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(field.label());
    if let Some(error) = error {
        block = block.title_bottom(Line::from(error.to_string()).style(Style::default().fg(Color::Red)));
    }

    let inner = block.inner(area);
    let width = inner.width.max(1) as usize;
    let height = inner.height.max(1) as usize;

    let mut paragraph = match field.kind() {
        FieldKind::Select(_) => Paragraph::new(select_line(app, field, focused)),
        _ if value.is_empty() => Paragraph::new(Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        )))
        .wrap(Wrap { trim: false }),
        FieldKind::TextArea => {
            let rows: Vec<Line> = wrap_visual_lines(value, width)
                .into_iter()
                .map(Line::from)
                .collect();
            let (row, _) = visual_cursor(value, app.cursor_position, width);
            let scroll_y = if focused { row.saturating_sub(height - 1) } else { 0 };
            Paragraph::new(rows).scroll((scroll_y as u16, 0))
        }
        FieldKind::Text => {
            let scroll_x = if focused {
                app.cursor_position.saturating_sub(width - 1)
            } else {
                0
            };
            Paragraph::new(value).scroll((0, scroll_x as u16))
        }
    };
    paragraph = paragraph.block(block).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);

    if focused && !inner.is_empty() && !matches!(field.kind(), FieldKind::Select(_)) {
        let (row, col) = match field.kind() {
            FieldKind::TextArea => {
                let (row, col) = visual_cursor(value, app.cursor_position, width);
                (row.min(height - 1), col)
            }
            _ => (0, app.cursor_position.min(width - 1)),
        };
        f.set_cursor_position(Position::new(inner.x + col as u16, inner.y + row as u16));
    }
}

fn select_line(app: &App, field: Field, focused: bool) -> Text<'static> {
    let (text, style) = match app.form.fields().selected_label(field) {
        Some(label) => (label, Style::default().fg(Color::White)),
        None => (field.placeholder(), Style::default().fg(Color::DarkGray)),
    };
    let mut spans = vec![Span::styled(text, style)];
    if focused {
        spans.push(Span::styled("  ◂ ▸", Style::default().fg(ACCENT)));
    }
    Line::from(spans).into()
}

/// Hard-wraps `value` into rows of at most `width` characters.
///
/// Every logical line of length `n` takes `n / width + 1` rows, so a cursor
/// sitting just past a full row still has a row to land on.
fn wrap_visual_lines(value: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in value.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        for row in 0..=chars.len() / width {
            let start = row * width;
            let end = (start + width).min(chars.len());
            rows.push(chars[start..end].iter().collect());
        }
    }
    rows
}

/// Row and column of a character cursor within [`wrap_visual_lines`] output.
fn visual_cursor(value: &str, cursor: usize, width: usize) -> (usize, usize) {
    let width = width.max(1);
    let mut row = 0;
    let mut col = 0;
    for c in value.chars().take(cursor) {
        if c == '\n' {
            row += col / width + 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (row + col / width, col % width)
}

fn render_submit_button(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Submit;
    let label = if app.form.submitting() {
        "Submitting..."
    } else {
        "Submit Application"
    };

    let mut style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    if focused {
        style = style.bg(ACCENT);
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { ACCENT } else { Color::Gray }));
    if focused && !app.form.submitting() && !app.form.progress().is_complete() {
        block = block.title_bottom(Line::from(SUBMIT_HINT).style(Style::default().fg(Color::Yellow)));
    }

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(block);
    f.render_widget(button, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => app.status_message.clone().unwrap_or_else(|| {
            "Tab/↑↓: move | ←→/Space: choose option | Ctrl+S: submit | F1: help | Ctrl+Q: quit"
                .to_string()
        }),
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let style = match app.mode {
        AppMode::Normal if app.form.submitting() => Style::default().fg(Color::Yellow),
        AppMode::Normal => Style::default(),
        AppMode::Help => Style::default().fg(Color::Cyan),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn render_toast(f: &mut Frame, toast: &Toast) {
    let area = f.area();
    let width = area.width.min(48);
    let popup_area = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: area.height.min(5),
    }
    .intersection(area);
    if popup_area.is_empty() {
        return;
    }

    let color = match toast.notification.kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    f.render_widget(Clear, popup_area);
    let body = Paragraph::new(toast.notification.description.as_str())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(Span::styled(
                    toast.notification.title.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(body, popup_area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("applyform Help (Line {}/{})", start_line + 1, help_lines.len()))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

const HELP_TEXT: &str = r#"APPLYFORM HELP

=== FILLING IN THE FORM ===
Tab / ↓         Next field
Shift+Tab / ↑   Previous field
Enter           Next field (new line in Message, submit on the button)
←→              Move the cursor, or choose an option in Position/Experience
Space           Next option in Position/Experience
Backspace/Del   Delete a character, or clear a selected option
Home / End      Jump to start or end of the field

=== SUBMITTING ===
Ctrl+S          Submit from anywhere
Enter / Space   Submit when the button is focused

All fields are required. The email must look like name@example.com.
Errors are shown under each field and disappear as soon as you edit it.
While a submission is in progress further submits are ignored.
After a successful submission the form is cleared.

=== POSITIONS ===
Frontend Developer, Backend Developer, Full Stack Developer, UI/UX Designer

=== EXPERIENCE ===
0-1 years, 1-3 years, 3-5 years, 5+ years

=== OTHER ===
Esc             Dismiss notification / status message
F1              Show or hide this help
Ctrl+Q/Ctrl+C   Quit"#;
