//! Color swatches

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::editor::ColorPalette;
use crate::models::Rgb;

pub fn swatch_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.components();
    Color::Rgb(r, g, b)
}

/// One span per palette slot, the selected one bracketed
pub fn palette_spans(palette: &ColorPalette, focused: bool) -> Vec<Span<'static>> {
    let marker = if focused { Color::Cyan } else { Color::White };
    palette
        .colors()
        .enumerate()
        .flat_map(|(idx, rgb)| {
            let selected = palette.selected() == Some(idx);
            let (open, close) = if selected { ("[", "]") } else { (" ", " ") };
            [
                Span::styled(open, Style::default().fg(marker).add_modifier(Modifier::BOLD)),
                Span::styled("██", Style::default().fg(swatch_color(rgb))),
                Span::styled(close, Style::default().fg(marker).add_modifier(Modifier::BOLD)),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::THEME_PALETTE;

    #[test]
    fn test_swatch_color() {
        assert_eq!(swatch_color(Rgb::new(0x102030)), Color::Rgb(0x10, 0x20, 0x30));
    }

    #[test]
    fn test_selected_slot_is_bracketed() {
        let palette = ColorPalette::build(THEME_PALETTE[1]);
        let spans = palette_spans(&palette, true);
        assert_eq!(spans.len(), THEME_PALETTE.len() * 3);
        assert_eq!(spans[3].content, "[");
        assert_eq!(spans[0].content, " ");
    }
}
