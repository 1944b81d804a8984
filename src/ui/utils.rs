use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// Centers a box of at most `width` x `height` inside `r`
pub fn centered_box(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Cuts `text` to `width` display columns, ending with `…` when shortened
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for character in text.chars() {
        let char_width = character.width().unwrap_or(0);
        if used + char_width > width - 1 {
            break;
        }
        used += char_width;
        result.push(character);
    }
    result.push('…');
    result
}
