//! UI helper functions

use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::theme::{ROUNDED_BORDERS, gradient};

/// Greedy word wrap by display width.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Shorten `text` to `max_width` columns, ending in "..." when cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    for ch in text.chars() {
        let mut probe = out.clone();
        probe.push(ch);
        if probe.width() > budget {
            break;
        }
        out = probe;
    }
    out.push_str("...");
    out
}

/// Display width of a line.
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|s| s.content.width()).sum()
}

/// Text painted with the heading gradient, one color per character.
pub fn gradient_text(text: &str, modifier: Modifier) -> Vec<Span<'static>> {
    let count = text.chars().count().max(2) - 1;
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            Span::styled(
                ch.to_string(),
                Style::default()
                    .fg(gradient(i as f32 / count as f32))
                    .add_modifier(modifier),
            )
        })
        .collect()
}

/// Centered section heading followed by a short gradient rule.
pub fn section_heading(title: &str) -> Vec<Line<'static>> {
    let rule: String = "━".repeat(12);
    vec![
        Line::from(gradient_text(title, Modifier::BOLD)).alignment(Alignment::Center),
        Line::from(gradient_text(&rule, Modifier::empty())).alignment(Alignment::Center),
    ]
}

/// Wrap body lines in a rounded text box `width` columns wide.
pub fn card(body: Vec<Line<'static>>, width: usize, border: Color) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let edge = Style::default().fg(border);
    let horizontal = ROUNDED_BORDERS.horizontal_top.repeat(width.saturating_sub(2));

    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(Line::from(Span::styled(
        format!(
            "{}{}{}",
            ROUNDED_BORDERS.top_left, horizontal, ROUNDED_BORDERS.top_right
        ),
        edge,
    )));
    for line in body {
        let pad = inner.saturating_sub(line_width(&line));
        let mut spans = vec![Span::styled(format!("{} ", ROUNDED_BORDERS.vertical_left), edge)];
        spans.extend(line.spans);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(format!(" {}", ROUNDED_BORDERS.vertical_right), edge));
        out.push(Line::from(spans));
    }
    out.push(Line::from(Span::styled(
        format!(
            "{}{}{}",
            ROUNDED_BORDERS.bottom_left,
            ROUNDED_BORDERS.horizontal_bottom.repeat(width.saturating_sub(2)),
            ROUNDED_BORDERS.bottom_right
        ),
        edge,
    )));
    out
}

/// Lay tag chips out left to right, wrapping at `max_width`.
pub fn chips(tags: &[String], prefix: &str, style: Style, max_width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for tag in tags {
        let chip = format!(" {prefix}{tag} ");
        let w = chip.width();
        if used > 0 && used + 1 + w > max_width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(chip, style));
        used += w;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Centre a column at most `max_width` wide inside `area`.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("plain text", 0), vec!["plain text"]);
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("Python Streamlit Google Gemini", 16),
            vec!["Python Streamlit", "Google Gemini"]
        );
    }

    #[test]
    fn test_wrap_text_counts_display_width() {
        // en dash is one column wide despite being three bytes
        assert_eq!(wrap_text("May 2024 – Jan", 14), vec!["May 2024 – Jan"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Rodney Roy Gitonga", 10), "Rodney ...");
    }

    #[test]
    fn test_card_pads_to_width() {
        let lines = card(vec![Line::from("hi")], 10, Color::Cyan);
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(line_width(line), 10);
        }
    }

    #[test]
    fn test_chips_wrap() {
        let tags = vec!["Python".to_string(), "CLI".to_string(), "SQLite".to_string()];
        let lines = chips(&tags, "#", Style::default(), 16);
        assert_eq!(lines.len(), 2);
        assert_eq!(line_width(&lines[0]), " #Python ".len() + 1 + " #CLI ".len());
    }

    #[test]
    fn test_centered_column() {
        let area = Rect::new(0, 3, 120, 20);
        assert_eq!(centered_column(area, 100), Rect::new(10, 3, 100, 20));
        assert_eq!(centered_column(Rect::new(0, 0, 60, 5), 100), Rect::new(0, 0, 60, 5));
    }
}
