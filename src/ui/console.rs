//! The console body: two joy-cons around the tablet.

use crate::app::{App, Geometry, StickPosition};
use crate::input::ControlId;
use crate::ui::{screen, utils};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};

const JOYCON_WIDTH: u16 = 13;
const MAX_WIDTH: u16 = 124;
const MAX_HEIGHT: u16 = 34;

const LEFT_COLOR: Color = Color::Cyan;
const RIGHT_COLOR: Color = Color::LightRed;

struct ConsoleLayout {
    body: Rect,
    left: Rect,
    tablet: Rect,
    right: Rect,
}

/// Rows of a joy-con, top to bottom
struct JoyconSections {
    sign: Rect,
    stick: Rect,
    cross: Rect,
    option: Rect,
}

fn console_layout(area: Rect) -> ConsoleLayout {
    let body = utils::centered_box(MAX_WIDTH, MAX_HEIGHT, area);
    let [left, tablet, right] = Layout::horizontal([
        Constraint::Length(JOYCON_WIDTH),
        Constraint::Min(20),
        Constraint::Length(JOYCON_WIDTH),
    ])
    .areas(body);
    ConsoleLayout {
        body,
        left,
        tablet,
        right,
    }
}

/// The left joy-con has the stick above the d-pad, the right one below the
/// face buttons
fn joycon_sections(joycon: Rect, stick_first: bool) -> JoyconSections {
    let inner = joycon_block(Color::Reset).inner(joycon);
    let [sign, _, first, _, second, _, option] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);
    let (stick, cross) = if stick_first {
        (first, second)
    } else {
        (second, first)
    };
    JoyconSections {
        sign,
        stick,
        cross,
        option,
    }
}

fn tablet_block() -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn joycon_block(color: Color) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// Regions of the console for a terminal of size `area`
pub fn geometry(area: Rect) -> Geometry {
    let layout = console_layout(area);
    let screen = tablet_block().inner(layout.tablet);
    let [_, grid] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(screen);
    let grid = Rect {
        x: grid.x.saturating_add(1),
        width: grid.width.saturating_sub(2),
        ..grid
    };
    let stick = joycon_sections(layout.left, true).stick;
    Geometry {
        screen,
        grid,
        stick_origin: Position::new(stick.x + stick.width / 2, stick.y + stick.height / 2),
    }
}

pub fn render_console(f: &mut Frame, app: &App) {
    let layout = console_layout(f.area());
    f.render_widget(Clear, layout.body);

    render_left_joycon(f, app, layout.left);
    render_right_joycon(f, app, layout.right);

    f.render_widget(tablet_block(), layout.tablet);
    screen::render_screen(f, app, &app.geometry);
}

fn render_left_joycon(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(joycon_block(LEFT_COLOR), area);
    let sections = joycon_sections(area, true);

    render_button(f, app, sections.sign, "−", ControlId::Minus);
    render_stick(f, sections.stick, app.stick, LEFT_COLOR);
    render_cross(
        f,
        app,
        sections.cross,
        [
            ("▲", ControlId::DpadUp),
            ("◀", ControlId::DpadLeft),
            ("▶", ControlId::DpadRight),
            ("▼", ControlId::DpadDown),
        ],
    );
    render_button(f, app, sections.option, "■", ControlId::Capture);
}

fn render_right_joycon(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(joycon_block(RIGHT_COLOR), area);
    let sections = joycon_sections(area, false);

    render_button(f, app, sections.sign, "+", ControlId::Plus);
    render_cross(
        f,
        app,
        sections.cross,
        [
            ("X", ControlId::X),
            ("Y", ControlId::Y),
            ("A", ControlId::A),
            ("B", ControlId::B),
        ],
    );
    render_stick(f, sections.stick, StickPosition::Center, RIGHT_COLOR);
    render_button(f, app, sections.option, "⌂", ControlId::Home);
}

fn button_style(app: &App, control: ControlId) -> Style {
    if app.controls.is_pressed(control) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_button(f: &mut Frame, app: &App, area: Rect, label: &str, control: ControlId) {
    f.render_widget(
        Paragraph::new(Span::styled(format!(" {label} "), button_style(app, control)))
            .alignment(Alignment::Center),
        area,
    );
}

/// Four buttons in a diamond: top, left, right, bottom
fn render_cross(f: &mut Frame, app: &App, area: Rect, buttons: [(&str, ControlId); 4]) {
    let [(top, top_id), (left, left_id), (right, right_id), (bottom, bottom_id)] = buttons;
    let button = |label: &str, control| Span::styled(format!(" {label} "), button_style(app, control));
    let lines = vec![
        Line::from(button(top, top_id)),
        Line::from(vec![button(left, left_id), Span::raw("   "), button(right, right_id)]),
        Line::from(button(bottom, bottom_id)),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Stick well with the head moved by `position`
fn render_stick(f: &mut Frame, area: Rect, position: StickPosition, color: Color) {
    let mut rows: Vec<Vec<char>> = ["╭───╮", "│   │", "╰───╯"]
        .iter()
        .map(|row| row.chars().collect())
        .collect();
    let (dx, dy) = position.offset();
    let column = usize::try_from(2 + dx).unwrap_or(2);
    let row = usize::try_from(1 + dy).unwrap_or(1);
    if let Some(cell) = rows.get_mut(row).and_then(|chars| chars.get_mut(column)) {
        *cell = '●';
    }

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|chars| {
            Line::from(Span::styled(
                chars.into_iter().collect::<String>(),
                Style::default().fg(color),
            ))
        })
        .collect();
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
