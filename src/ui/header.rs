use crate::ui::theme::{ACCENT, DOT_INACTIVE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar: card position, page dots and the bound selection value.
pub struct Header {
    index: usize,
    count: usize,
    selection: usize,
}

impl Header {
    pub fn new(index: usize, count: usize, selection: usize) -> Self {
        Self {
            index,
            count,
            selection,
        }
    }

    pub fn line(&self) -> Line<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  Snap Carousel", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("Card {}/{}", self.index + 1, self.count),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
        ];
        for dot in 0..self.count {
            let (symbol, color) = if dot == self.index {
                ("●", ACCENT)
            } else {
                ("○", DOT_INACTIVE)
            };
            spans.push(Span::styled(format!("{symbol} "), Style::default().fg(color)));
        }
        spans.push(Span::styled(" │  ", separator_style));
        spans.push(Span::styled(
            format!("selection = {}", self.selection),
            text_style,
        ));
        Line::from(spans)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(self.line()).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
