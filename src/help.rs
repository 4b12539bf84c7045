use ratatui::{
    buffer::Buffer,
    layout::Flex,
    layout::{Alignment, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

static TEXT: &[&str] = &[
    "ENTER, SPACE      Otwórz kalendarz / wybierz dzień",
    "←↑→↓, hjkl        Przesuń kursor",
    "<, PAGE UP        Poprzedni miesiąc",
    ">, PAGE DOWN      Następny miesiąc",
    "0, HOME           Dzisiaj",
    "g                 Idź do daty",
    "?                 Pokaż tę pomoc",
    "ESC               Zamknij kalendarz",
    "q                 Zakończ",
    "",
    "Naciśnij dowolny klawisz.",
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = TEXT.iter().map(|&s| Line::raw(s)).collect::<Vec<_>>();
        let text = Text::from(lines);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Klawisze ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.0);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        }
        .intersection(area);
        Clear.render(outer_area, buf);
        Block::new().style(self.0).render(outer_area, buf);
        para.render(help_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::BASE_STYLE;

    #[test]
    fn test_render_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Help(BASE_STYLE).render(area, &mut buf);
        let rows = (0..24)
            .map(|y| (0..80).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>();
        let top = rows.iter().position(|r| r.contains(" Klawisze ")).unwrap();
        assert!(rows[top + 1].contains("Otwórz kalendarz"));
        assert!(rows.iter().any(|r| r.contains("Naciśnij dowolny klawisz.")));
    }

    #[test]
    fn test_render_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        Help(BASE_STYLE).render(area, &mut buf);
    }
}
