use crate::app::{App, Sprite, SpriteVariant};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const MARIO: [&str; 3] = [" ▄▄▄ ", "▐(M)▌", " ▀▀▀ "];
const LUIGI: [&str; 3] = [" ▄▄▄ ", "▐(L)▌", " ▀▀▀ "];

fn template(sprite: &Sprite) -> (&'static [&'static str], Color) {
    let (art, color) = match sprite.variant {
        SpriteVariant::Mario => (&MARIO, Color::Red),
        SpriteVariant::Luigi => (&LUIGI, Color::Green),
    };
    // Small sprites only show the badge line
    if sprite.size == 1 {
        (art.get(1..2).unwrap_or(&[]), color)
    } else {
        (art.as_slice(), color)
    }
}

pub fn render_background(f: &mut Frame, app: &App) {
    let area = f.area();
    for sprite in app.background.sprites() {
        if let Some(rect) = sprite_rect(sprite, area) {
            let (art, color) = template(sprite);
            let lines: Vec<Line> = art
                .iter()
                .map(|row| Line::from(Span::styled(*row, Style::default().fg(color))))
                .collect();
            f.render_widget(Paragraph::new(lines), rect);
        }
    }
}

/// Where a sprite lands in `area`, or `None` while it is off screen
fn sprite_rect(sprite: &Sprite, area: Rect) -> Option<Rect> {
    let rows = if sprite.size == 1 { 1 } else { 3 };
    let width = 5u16;
    if sprite.height < 0.0 || area.width < width || area.height < rows {
        return None;
    }

    let x = u32::from(area.width - width) * u32::from(sprite.column.min(100)) / 100;
    let from_bottom = (f32::from(area.height) * sprite.height / 100.0) as u16;
    let y = area.height.checked_sub(from_bottom)?.checked_sub(rows)?;

    Some(Rect::new(
        area.x + u16::try_from(x).ok()?,
        area.y + y,
        width,
        rows,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite(column: u16, height: f32, size: u8) -> Sprite {
        Sprite {
            variant: SpriteVariant::Mario,
            column,
            height,
            size,
            speed: 5.0,
        }
    }

    #[test]
    fn test_sprite_rises_from_bottom() {
        let area = Rect::new(0, 0, 105, 40);
        assert_eq!(sprite_rect(&sprite(0, 0.0, 2), area), Some(Rect::new(0, 37, 5, 3)));
        assert_eq!(sprite_rect(&sprite(100, 50.0, 1), area), Some(Rect::new(100, 19, 5, 1)));
    }

    #[test]
    fn test_sprite_off_screen_is_skipped() {
        let area = Rect::new(0, 0, 80, 20);
        assert_eq!(sprite_rect(&sprite(10, -5.0, 2), area), None);
        assert_eq!(sprite_rect(&sprite(10, 105.0, 3), area), None);
    }

    #[test]
    fn test_small_sprite_shows_badge_only() {
        let (art, _) = template(&sprite(0, 0.0, 1));
        assert_eq!(art, &["▐(M)▌"]);
    }
}
