//! UI components for the terminal client

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::{Focus, FormField};
use crate::viewmodel::{TaskRow, ViewModel};

/// Draw the full task dashboard
pub fn draw(f: &mut ratatui::Frame, area: Rect, view_model: &ViewModel, focus: Focus) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and language bar
            Constraint::Length(6), // New task form
            Constraint::Length(1), // Error/notice banner
            Constraint::Min(3),    // Task list
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(f, chunks[0], view_model);
    draw_draft_form(f, chunks[1], view_model, focus);
    draw_banner(f, chunks[2], view_model);
    draw_task_list(f, chunks[3], view_model, focus);
    draw_footer(f, chunks[4], focus);

    if let Some(form) = &view_model.edit_form {
        if let Focus::Edit(field) = focus {
            draw_edit_overlay(f, area, view_model, form, field);
        }
    }
}

fn draw_header(f: &mut ratatui::Frame, area: Rect, view_model: &ViewModel) {
    let line = Line::from(vec![
        Span::styled(
            "TaskDeck",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  •  Translate: "),
        Span::styled(
            view_model.source_language.label(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" → "),
        Span::styled(
            view_model.target_language.label(),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn draw_draft_form(f: &mut ratatui::Frame, area: Rect, view_model: &ViewModel, focus: Focus) {
    let block = Block::default().borders(Borders::ALL).title("New task");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let focused = |field| matches!(focus, Focus::Draft(f) if f == field);

    draw_field(
        f,
        rows[0],
        "Task",
        &view_model.draft.task_text,
        "What needs doing?",
        focused(FormField::Text),
    );
    draw_field(
        f,
        rows[1],
        "Comment",
        &view_model.draft.comment,
        "Details (optional)",
        focused(FormField::Comment),
    );
    draw_field(
        f,
        rows[2],
        "Assignee",
        &view_model.draft_assignee,
        "←/→ to pick a worker",
        focused(FormField::Worker),
    );
    draw_field(
        f,
        rows[3],
        "Deadline",
        &view_model.draft.time,
        "2025-06-01T12:00 (optional)",
        focused(FormField::Deadline),
    );
}

fn draw_field(
    f: &mut ratatui::Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
) {
    let (text, value_style) = if value.is_empty() {
        (placeholder, Style::default().fg(Color::DarkGray))
    } else {
        (value, Style::default().fg(Color::White))
    };

    let label_style = if is_focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let line = Line::from(vec![
        Span::styled(format!(" {:<9}", label), label_style),
        Span::raw(" "),
        Span::styled(text.to_string(), value_style),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn draw_banner(f: &mut ratatui::Frame, area: Rect, view_model: &ViewModel) {
    let line = if let Some(error) = &view_model.error_message {
        Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(notice) = &view_model.notice {
        Line::from(Span::styled(
            format!(" {}", notice),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::default()
    };

    f.render_widget(Paragraph::new(line), area);
}

fn draw_task_list(f: &mut ratatui::Frame, area: Rect, view_model: &ViewModel, focus: Focus) {
    let items: Vec<ListItem> = if view_model.rows.is_empty() {
        vec![ListItem::new("No tasks yet")]
    } else {
        view_model.rows.iter().map(task_item).collect()
    };

    let block_style = if matches!(focus, Focus::Tasks) {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(block_style)
                .title(format!("Tasks ({})", view_model.rows.len())),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut state = ListState::default();
    if !view_model.rows.is_empty() {
        state.select(Some(view_model.selected_task_index));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn task_item(row: &TaskRow) -> ListItem<'static> {
    let (marker, title_style) = if row.completed {
        (
            "[x] ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default().fg(Color::White))
    };

    let mut title_spans = vec![
        Span::raw(marker),
        Span::styled(row.title.clone(), title_style),
    ];
    if row.editing {
        title_spans.push(Span::styled(
            "  (editing)",
            Style::default().fg(Color::Yellow),
        ));
    }

    let mut meta = format!("    {} · due {}", row.assignee, row.deadline);
    if !row.comment.is_empty() {
        meta.push_str(" — ");
        meta.push_str(&row.comment);
    }

    ListItem::new(vec![
        Line::from(title_spans),
        Line::from(Span::styled(meta, Style::default().fg(Color::DarkGray))),
    ])
}

fn draw_edit_overlay(
    f: &mut ratatui::Frame,
    area: Rect,
    view_model: &ViewModel,
    form: &crate::viewmodel::EditForm,
    focused_field: FormField,
) {
    let popup_area = centered_rect(70, 40, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Edit task #{}", form.task_id))
        .style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let assignee = if view_model.workers.is_empty() {
        form.assignee.clone()
    } else {
        format!("{} (←/→ to change)", form.assignee)
    };

    draw_field(
        f,
        rows[0],
        "Task",
        &form.text_task,
        "",
        focused_field == FormField::Text,
    );
    draw_field(
        f,
        rows[1],
        "Comment",
        &form.comment,
        "",
        focused_field == FormField::Comment,
    );
    draw_field(
        f,
        rows[2],
        "Assignee",
        &assignee,
        "",
        focused_field == FormField::Worker,
    );
    draw_field(
        f,
        rows[3],
        "Deadline",
        &form.deadline,
        "",
        focused_field == FormField::Deadline,
    );
}

fn draw_footer(f: &mut ratatui::Frame, area: Rect, focus: Focus) {
    let shortcuts = match focus {
        Focus::Tasks => vec![
            Span::styled("↑↓", Style::default().fg(Color::Yellow)),
            Span::raw(" Select • "),
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" New task • "),
            Span::styled("e", Style::default().fg(Color::Green)),
            Span::raw(" Edit • "),
            Span::styled("c", Style::default().fg(Color::Green)),
            Span::raw(" Toggle done • "),
            Span::styled("d", Style::default().fg(Color::Red)),
            Span::raw(" Delete • "),
            Span::styled("t", Style::default().fg(Color::Magenta)),
            Span::raw(" Translate • "),
            Span::styled("[ ]", Style::default().fg(Color::Magenta)),
            Span::raw(" Languages • "),
            Span::styled("q", Style::default().fg(Color::Red)),
            Span::raw(" Quit"),
        ],
        Focus::Draft(_) => vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" Next field • "),
            Span::styled("Type", Style::default().fg(Color::Green)),
            Span::raw(" Fill in • "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" Add task • "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" Back"),
        ],
        Focus::Edit(_) => vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" Next field • "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" Save • "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ],
    };

    let line = Line::from(shortcuts);
    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
