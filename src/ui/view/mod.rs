//! View layer
//!
//! Main render entry point and the per-region render functions

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{App, Mode};
use components::{render_dialog_frame, render_input_widget};
use layouts::centered_rect;

/// Render the whole screen from current state.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(3), // input
            Constraint::Min(5),    // task list
            Constraint::Length(3), // help
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_input(frame, app, chunks[1]);
    render_list(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    // blocking validation alert on top of everything
    if let Mode::Alert(message) = &app.mode {
        render_alert(frame, message);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Task Manager")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = matches!(app.mode, Mode::Input);

    // the box title doubles as the contextual submit label
    if app.draft.is_empty() && !is_focused {
        let placeholder = Paragraph::new("Enter task name")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(app.submit_label()).borders(Borders::ALL));
        frame.render_widget(placeholder, area);
    } else {
        render_input_widget(
            frame,
            area,
            app.submit_label(),
            &app.draft,
            is_focused,
            Color::Yellow,
        );
    }
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let marker = if app.editing_id == Some(task.id) {
                "* "
            } else {
                "  "
            };
            let content = format!(
                "{}{}  ({})",
                marker,
                task.name,
                task.created_at.format("%m-%d %H:%M")
            );

            let style = if i == app.selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if app.editing_id == Some(task.id) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![Span::styled(content, style)]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(Block::default().title("Tasks").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list_widget, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        Mode::Browse => {
            if app.tasks.is_empty() {
                "No tasks yet, press [a] to add one  [q] Quit"
            } else {
                "[a/i] New  [e] Edit  [d] Delete  [j/k] Navigate  [q] Quit"
            }
        }
        Mode::Input => {
            if app.editing_id.is_some() {
                "[Enter] Update Task  [Esc] Back to list"
            } else {
                "[Enter] Add Task  [Esc] Back to list"
            }
        }
        Mode::Alert(_) => "[Enter] Dismiss",
    };

    let status = app.status.as_deref().unwrap_or("");
    let text = if status.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, status)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_alert(frame: &mut Frame, message: &str) {
    let area = centered_rect(50, 20, frame.area());
    let inner = render_dialog_frame(frame, area, "Error", Color::Red);

    let dialog = Paragraph::new(format!("{}\n\n[Enter] OK", message))
        .style(Style::default().fg(Color::Red));
    frame.render_widget(dialog, inner);
}
