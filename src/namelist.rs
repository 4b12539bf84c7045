use crate::locale::LocaleFormatter;
use crate::theme::namelist::{BADGE_STYLE, EMPTY_STYLE, HEADING_DATE_STYLE, HEADING_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget},
};
use time::Date;

static EMPTY_MESSAGE: &str = "Brak solenizantów w tym dniu.";

/// Blank columns between two badges on the same line
static BADGE_GAP: &str = "  ";

/// Lists the names celebrated on a date as a row of badges, in the order
/// given, or a fixed message if there are none
#[derive(Debug)]
pub(crate) struct NameList<'a, L> {
    date: Date,
    names: &'a [&'a str],
    locale: &'a L,
}

impl<'a, L: LocaleFormatter> NameList<'a, L> {
    pub(crate) fn new(date: Date, names: &'a [&'a str], locale: &'a L) -> Self {
        NameList {
            date,
            names,
            locale,
        }
    }

    fn heading(&self) -> Line<'static> {
        Line::from_iter([
            Span::styled("Imieniny ", HEADING_STYLE),
            Span::styled(self.locale.day_and_month(self.date), HEADING_DATE_STYLE),
            Span::styled(" obchodzą:", HEADING_STYLE),
        ])
    }
}

impl<L: LocaleFormatter> Widget for NameList<'_, L> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [heading_area, _, box_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        Paragraph::new(self.heading().centered()).render(heading_area, buf);
        let block = Block::bordered();
        let inner = block.inner(box_area);
        block.render(box_area, buf);
        let text = if self.names.is_empty() {
            Text::from(Line::styled(EMPTY_MESSAGE, EMPTY_STYLE))
        } else {
            Text::from(badge_lines(self.names, inner.width))
        };
        Paragraph::new(text.centered()).render(inner, buf);
    }
}

/// Lay out one badge per name, in order, packing as many badges onto each
/// line as fit in `width` columns.  A badge wider than `width` gets a line to
/// itself.
fn badge_lines(names: &[&str], width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut used = 0;
    for name in names {
        let badge = Span::styled(format!(" {name} "), BADGE_STYLE);
        let badge_width = badge.width();
        if !current.is_empty() && used + BADGE_GAP.len() + badge_width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(BADGE_GAP));
            used += BADGE_GAP.len();
        }
        current.push(badge);
        used += badge_width;
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}
