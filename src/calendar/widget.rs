use super::grid::{CalendarCell, GRID_ROWS, WEEK_COLUMNS};
use super::picker::{DatePicker, Hitbox, PanelHitbox};
use crate::locale::LocaleFormatter;
use crate::theme::picker::{
    BUTTON_OPEN_STYLE, BUTTON_STYLE, CURSOR_MODIFIER, LABEL_STYLE, NAV_STYLE, OUTSIDE_MONTH_STYLE,
    PANEL_STYLE, PLAIN_DAY_STYLE, SELECTED_STYLE, TITLE_STYLE, TODAY_STYLE, WEEKDAY_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use time::Date;

static LABEL: &str = "Wybierz datę";

static PREVIOUS: &str = " < ";

static NEXT: &str = " > ";

/// Number of columns per day of week
pub(super) const CELL_WIDTH: u16 = 4;

/// Width of the day grid, and thus of the inside of the panel
const GRID_WIDTH: u16 = CELL_WIDTH * WEEK_COLUMNS;

/// Navigation line plus weekday header line
const PANEL_HEADER_LINES: u16 = 2;

/// Width of the panel including its border
const PANEL_WIDTH: u16 = GRID_WIDTH + 2;

/// Height of the panel including its border
const PANEL_HEIGHT: u16 = PANEL_HEADER_LINES + GRID_ROWS + 2;

/// Lines above the panel: the label and the button
const BUTTON_LINES: u16 = 2;

/// How a day in the grid is displayed.  Earlier variants take priority.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CellKind {
    OutsideMonth,
    Selected,
    Today,
    Plain,
}

impl CellKind {
    pub(crate) fn classify(cell: CalendarCell, selected: Date, today: Date) -> CellKind {
        if !cell.is_current_month {
            CellKind::OutsideMonth
        } else if cell.date == selected {
            CellKind::Selected
        } else if cell.date == today {
            CellKind::Today
        } else {
            CellKind::Plain
        }
    }

    fn show(self, date: Date) -> Span<'static> {
        match self {
            CellKind::OutsideMonth => Span::styled(format!(" {:2} ", date.day()), OUTSIDE_MONTH_STYLE),
            CellKind::Selected => Span::styled(format!(" {:2} ", date.day()), SELECTED_STYLE),
            CellKind::Today => Span::styled(format!("[{:2}]", date.day()), TODAY_STYLE),
            CellKind::Plain => Span::styled(format!(" {:2} ", date.day()), PLAIN_DAY_STYLE),
        }
    }
}

/// The date picker: a label, a button showing the selected date, and, while
/// the picker is open, a panel with the month grid drawn below the button
/// over whatever is there.
#[derive(Debug)]
pub(crate) struct PickerWidget<'a, L> {
    selected: Date,
    today: Date,
    locale: &'a L,
}

impl<'a, L: LocaleFormatter> PickerWidget<'a, L> {
    pub(crate) fn new(selected: Date, today: Date, locale: &'a L) -> Self {
        PickerWidget {
            selected,
            today,
            locale,
        }
    }

    fn draw_panel(&self, panel: Rect, buf: &mut Buffer, state: &DatePicker) -> PanelHitbox {
        Clear.render(panel, buf);
        let block = Block::bordered().style(PANEL_STYLE);
        let inner = block.inner(panel);
        block.render(panel, buf);
        let mut canvas = BufferCanvas::new(inner, buf);
        canvas.mvprint(0, 0, PREVIOUS, NAV_STYLE);
        let next_x = GRID_WIDTH - width_of(NEXT);
        canvas.mvprint(0, next_x, NEXT, NAV_STYLE);
        let title = self.locale.month_and_year(state.view());
        canvas.mvprint(
            0,
            GRID_WIDTH.saturating_sub(width_of(&title)) / 2,
            title,
            TITLE_STYLE,
        );
        for (x, abbrev) in std::iter::zip(
            (0..).step_by(usize::from(CELL_WIDTH)),
            self.locale.weekday_abbreviations(),
        ) {
            canvas.mvprint(1, x, format!(" {abbrev} "), WEEKDAY_STYLE);
        }
        for (y, week) in std::iter::zip(PANEL_HEADER_LINES.., state.grid().weeks()) {
            for (x, &cell) in std::iter::zip((0..).step_by(usize::from(CELL_WIDTH)), week) {
                let mut span = CellKind::classify(cell, self.selected, self.today).show(cell.date);
                if state.is_open() && cell.date == state.cursor() {
                    span.style = span.style.add_modifier(CURSOR_MODIFIER);
                }
                canvas.mvprint(y, x, span.content, span.style);
            }
        }
        PanelHitbox {
            area: panel,
            previous: Rect::new(inner.x, inner.y, width_of(PREVIOUS), 1),
            next: Rect::new(inner.x + next_x, inner.y, width_of(NEXT), 1),
            cells: Rect::new(
                inner.x,
                inner.y + PANEL_HEADER_LINES,
                GRID_WIDTH,
                GRID_ROWS,
            )
            .intersection(inner),
        }
    }
}

impl<L: LocaleFormatter> StatefulWidget for PickerWidget<'_, L> {
    type State = DatePicker;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let label = centered(area, 0, width_of(LABEL));
        BufferCanvas::new(area, buf).mvprint(0, label.x - area.x, LABEL, LABEL_STYLE);
        let text = format!("[ {} ▾ ]", self.locale.long_date(self.selected));
        let button = centered(area, 1, width_of(&text));
        BufferCanvas::new(area, buf).mvprint(
            1,
            button.x - area.x,
            text,
            if state.is_open() {
                BUTTON_OPEN_STYLE
            } else {
                BUTTON_STYLE
            },
        );
        let header = Rect {
            height: BUTTON_LINES,
            ..area
        }
        .intersection(area);
        let panel = if state.is_open() {
            let panel = Rect {
                height: PANEL_HEIGHT,
                ..centered(area, BUTTON_LINES, PANEL_WIDTH)
            }
            .intersection(area);
            if panel.is_empty() {
                None
            } else {
                Some(self.draw_panel(panel, buf, state))
            }
        } else {
            None
        };
        state.set_hitbox(Hitbox {
            header,
            button,
            panel,
        });
    }
}

/// The one-line-tall rectangle of the given width centered horizontally in
/// `area`, `y` lines below its top, clipped to `area`
fn centered(area: Rect, y: u16, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y.saturating_add(y),
        width,
        height: 1,
    }
    .intersection(area)
}

fn width_of(s: &str) -> u16 {
    u16::try_from(Span::raw(s).width()).unwrap_or(u16::MAX)
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    // `y` and `x` are relative to the canvas; text extending past the right
    // edge is truncated, and text starting outside the canvas is dropped.
    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            self.buf.set_stringn(
                self.area.x + x,
                self.area.y + y,
                s,
                usize::from(self.area.width - x),
                style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::grid::GRID_CELLS;
    use crate::calendar::{PickerInput, PickerOutput, YearMonth};
    use crate::locale::Polish;
    use time::macros::date;
    use time::Month;

    fn rows(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn render(picker: &mut DatePicker, selected: Date, today: Date, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        PickerWidget::new(selected, today, &Polish).render(area, &mut buf, picker);
        buf
    }

    fn cell(date: Date, is_current_month: bool) -> CalendarCell {
        CalendarCell {
            date,
            is_current_month,
        }
    }

    #[test]
    fn test_classify() {
        let selected = date!(2024 - 01 - 10);
        let today = date!(2024 - 01 - 12);
        assert_eq!(
            CellKind::classify(cell(selected, false), selected, today),
            CellKind::OutsideMonth
        );
        assert_eq!(
            CellKind::classify(cell(selected, true), selected, today),
            CellKind::Selected
        );
        assert_eq!(
            CellKind::classify(cell(today, true), selected, today),
            CellKind::Today
        );
        assert_eq!(
            CellKind::classify(cell(today, true), today, today),
            CellKind::Selected
        );
        assert_eq!(
            CellKind::classify(cell(date!(2024 - 01 - 11), true), selected, today),
            CellKind::Plain
        );
    }

    #[test]
    fn test_render_closed() {
        let area = Rect::new(0, 0, 30, 12);
        let mut picker = DatePicker::new(date!(2024 - 01 - 01)).unwrap();
        let buf = render(&mut picker, date!(2024 - 01 - 01), date!(2024 - 01 - 10), area);
        let rows = rows(&buf);
        assert_eq!(rows[0], "         Wybierz datę         ");
        assert_eq!(rows[1], "    [ 1 stycznia 2024 ▾ ]     ");
        assert!(rows[2..].iter().all(|r| r.trim().is_empty()));
    }

    #[test]
    fn test_render_open() {
        let area = Rect::new(0, 0, 30, 12);
        let mut picker = DatePicker::new(date!(2024 - 01 - 01)).unwrap();
        picker.handle_input(PickerInput::Toggle);
        let buf = render(&mut picker, date!(2024 - 01 - 01), date!(2024 - 01 - 10), area);
        assert_eq!(
            rows(&buf)[2..],
            [
                "┌────────────────────────────┐",
                "│ <      Styczeń 2024      > │",
                "│ Pn  Wt  Śr  Cz  Pt  So  Nd │",
                "│  1   2   3   4   5   6   7 │",
                "│  8   9 [10] 11  12  13  14 │",
                "│ 15  16  17  18  19  20  21 │",
                "│ 22  23  24  25  26  27  28 │",
                "│ 29  30  31   1   2   3   4 │",
                "│  5   6   7   8   9  10  11 │",
                "└────────────────────────────┘",
            ]
        );
        assert_eq!(buf[(2, 5)].style().bg, SELECTED_STYLE.bg);
        assert_eq!(buf[(17, 9)].style().fg, OUTSIDE_MONTH_STYLE.fg);
        assert_eq!(buf[(9, 6)].style().fg, TODAY_STYLE.fg);
    }

    #[test]
    fn test_render_tiny_area() {
        let area = Rect::new(0, 0, 10, 4);
        let mut picker = DatePicker::new(date!(2024 - 01 - 01)).unwrap();
        picker.handle_input(PickerInput::Toggle);
        let buf = render(&mut picker, date!(2024 - 01 - 01), date!(2024 - 01 - 10), area);
        assert_eq!(rows(&buf)[0], "Wybierz da");
    }

    #[test]
    fn test_click_cell() {
        let area = Rect::new(0, 0, 30, 12);
        let mut picker = DatePicker::new(date!(2024 - 01 - 01)).unwrap();
        picker.handle_input(PickerInput::Toggle);
        render(&mut picker, date!(2024 - 01 - 01), date!(2024 - 01 - 10), area);
        assert_eq!(
            picker.click(10, 5),
            PickerOutput::Select(date!(2024 - 01 - 03))
        );
        assert!(!picker.is_open());
    }

    #[test]
    fn test_click_trailing_cell() {
        let area = Rect::new(0, 0, 30, 12);
        let mut picker = DatePicker::new(date!(2024 - 01 - 01)).unwrap();
        picker.handle_input(PickerInput::Toggle);
        render(&mut picker, date!(2024 - 01 - 01), date!(2024 - 01 - 10), area);
        assert_eq!(
            picker.click(27, 10),
            PickerOutput::Select(date!(2024 - 02 - 11))
        );
    }

    #[test]
    fn test_click_navigation() {
        let area = Rect::new(0, 0, 30, 12);
        let mut picker = DatePicker::new(date!(2024 - 01 - 01)).unwrap();
        picker.handle_input(PickerInput::Toggle);
        render(&mut picker, date!(2024 - 01 - 01), date!(2024 - 01 - 10), area);
        assert_eq!(picker.click(2, 3), PickerOutput::Ok);
        assert_eq!(picker.view(), YearMonth::new(2023, Month::December).unwrap());
        assert_eq!(picker.click(27, 3), PickerOutput::Ok);
        assert_eq!(picker.click(27, 3), PickerOutput::Ok);
        assert_eq!(picker.view(), YearMonth::new(2024, Month::February).unwrap());
        assert!(picker.is_open());
    }

    #[test]
    fn test_click_inside_panel() {
        let area = Rect::new(0, 0, 30, 12);
        let mut picker = DatePicker::new(date!(2024 - 01 - 01)).unwrap();
        picker.handle_input(PickerInput::Toggle);
        render(&mut picker, date!(2024 - 01 - 01), date!(2024 - 01 - 10), area);
        assert_eq!(picker.click(15, 3), PickerOutput::Ok);
        assert_eq!(picker.click(0, 11), PickerOutput::Ok);
        assert!(picker.is_open());
    }

    #[test]
    fn test_click_label_row() {
        let area = Rect::new(0, 0, 40, 14);
        let mut picker = DatePicker::new(date!(2024 - 01 - 01)).unwrap();
        picker.handle_input(PickerInput::Toggle);
        render(&mut picker, date!(2024 - 01 - 01), date!(2024 - 01 - 10), area);
        assert_eq!(picker.click(0, 0), PickerOutput::Ok);
        assert!(picker.is_open());
    }

    #[test]
    fn test_click_outside() {
        let area = Rect::new(0, 0, 40, 14);
        let mut picker = DatePicker::new(date!(2024 - 01 - 01)).unwrap();
        picker.handle_input(PickerInput::Toggle);
        render(&mut picker, date!(2024 - 01 - 01), date!(2024 - 01 - 10), area);
        picker.handle_input(PickerInput::NextMonth);
        assert_eq!(picker.click(2, 5), PickerOutput::Ok);
        assert!(!picker.is_open());
        assert_eq!(picker.view(), YearMonth::new(2024, Month::February).unwrap());
    }

    #[test]
    fn test_click_button() {
        let area = Rect::new(0, 0, 30, 12);
        let mut picker = DatePicker::new(date!(2024 - 01 - 01)).unwrap();
        render(&mut picker, date!(2024 - 01 - 01), date!(2024 - 01 - 10), area);
        assert_eq!(picker.click(10, 1), PickerOutput::Ok);
        assert!(picker.is_open());
        render(&mut picker, date!(2024 - 01 - 01), date!(2024 - 01 - 10), area);
        assert_eq!(picker.click(10, 1), PickerOutput::Ok);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_grid_fills_panel() {
        let area = Rect::new(0, 0, 30, 12);
        let mut picker = DatePicker::new(date!(2024 - 03 - 01)).unwrap();
        picker.handle_input(PickerInput::Toggle);
        render(&mut picker, date!(2024 - 03 - 01), date!(2024 - 03 - 10), area);
        let last = picker.grid().get(GRID_CELLS - 1).unwrap();
        // Bottom right cell of the grid
        let x = 1 + CELL_WIDTH * (WEEK_COLUMNS - 1);
        let y = BUTTON_LINES + 1 + PANEL_HEADER_LINES + GRID_ROWS - 1;
        assert_eq!(picker.click(x, y), PickerOutput::Select(last.date));
        picker.handle_input(PickerInput::Toggle);
        render(&mut picker, date!(2024 - 03 - 01), date!(2024 - 03 - 10), area);
        // The bottom border is not a cell
        assert_eq!(picker.click(x, y + 1), PickerOutput::Ok);
        assert!(picker.is_open());
    }
}
