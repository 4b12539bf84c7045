use crate::theme::{SUBTITLE_STYLE, TITLE_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};

static TITLE: &str = "Imieniny Dnia";

static SUBTITLE: &str = "Sprawdź kto świętuje";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Header;

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::styled(TITLE, TITLE_STYLE),
            Line::styled(SUBTITLE, SUBTITLE_STYLE),
        ])
        .centered();
        Paragraph::new(text).render(area, buf);
    }
}
