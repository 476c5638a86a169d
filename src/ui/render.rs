use crate::carousel::{CardContext, SnapCarousel};
use crate::config::CardConfig;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::Regions;
use crate::ui::theme::{ACCENT, CARD_BORDER, CARD_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use std::time::Instant;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = Regions::compute(area, app.card_height());
    let carousel = app.carousel();

    let header_widget = Header::new(carousel.index(), carousel.count(), app.selection());
    frame.render_widget(header_widget.widget(), regions.header);

    frame.render_widget(Clear, regions.body);
    let track = SnapCarousel::new(app.deck(), card_widget).state(carousel, Instant::now());
    frame.render_widget(track, regions.track);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(regions.footer), regions.footer);
}

fn card_widget(card: &CardConfig, ctx: &CardContext) -> Paragraph<'static> {
    let border = if ctx.selected { ACCENT } else { CARD_BORDER };
    let title = Span::styled(
        format!(" {} ", card.title),
        Style::default().fg(border).add_modifier(Modifier::BOLD),
    );
    let position = Span::styled(
        format!(" {}/{} ", ctx.index + 1, ctx.count),
        Style::default().fg(CARD_BORDER),
    );

    Paragraph::new(vec![Line::from(""), Line::from(card.body.clone())])
        .style(Style::default().fg(CARD_TEXT))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .title_bottom(Line::from(position).right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
}
