use super::grid::{build_grid, MonthGrid, DAYS_IN_WEEK};
use super::month::{OutOfTimeError, YearMonth};
use super::widget::CELL_WIDTH;
use ratatui::layout::{Position, Rect};
use time::{Date, Duration};

/// Open/closed state, viewed month, and keyboard cursor of the date picker.
///
/// The picker never changes the selected date itself: a selection is
/// reported to the owner as [`PickerOutput::Select`], and the owner passes the
/// new date back in through [`DatePicker::sync()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DatePicker {
    state: PickerState,
    grid: MonthGrid,
    cursor: Date,
    hitbox: Option<Hitbox>,
}

impl DatePicker {
    pub(crate) fn new(selected: Date) -> Result<DatePicker, OutOfTimeError> {
        let month = YearMonth::containing(selected)?;
        Ok(DatePicker {
            state: PickerState::Closed,
            grid: build_grid(month),
            cursor: selected,
            hitbox: None,
        })
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state == PickerState::Open
    }

    pub(crate) fn view(&self) -> YearMonth {
        self.grid.month()
    }

    pub(crate) fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub(crate) fn cursor(&self) -> Date {
        self.cursor
    }

    /// Show the month containing `selected`, which the owner has just made
    /// the selected date.  The open/closed state is left alone.
    pub(crate) fn sync(&mut self, selected: Date) -> Result<(), OutOfTimeError> {
        let month = YearMonth::containing(selected)?;
        self.set_view(month);
        self.cursor = selected;
        Ok(())
    }

    pub(crate) fn handle_input(&mut self, input: PickerInput) -> PickerOutput {
        match input {
            PickerInput::Toggle => {
                self.state = match self.state {
                    PickerState::Closed => PickerState::Open,
                    PickerState::Open => PickerState::Closed,
                };
                log::debug!("Date picker toggled to {:?}", self.state);
                PickerOutput::Ok
            }
            PickerInput::Dismiss => {
                if self.is_open() {
                    log::debug!("Date picker dismissed");
                    self.state = PickerState::Closed;
                }
                PickerOutput::Ok
            }
            PickerInput::PreviousMonth => self.navigate(YearMonth::previous),
            PickerInput::NextMonth => self.navigate(YearMonth::next),
            PickerInput::Left => self.move_cursor(-1),
            PickerInput::Right => self.move_cursor(1),
            PickerInput::Up => self.move_cursor(-7),
            PickerInput::Down => self.move_cursor(7),
            PickerInput::Confirm if self.is_open() => self.select(self.cursor),
            PickerInput::Pick(date) if self.is_open() => self.select(date),
            PickerInput::Confirm | PickerInput::Pick(_) => PickerOutput::Invalid,
        }
    }

    /// Translate a left-button press at the given screen cell into picker
    /// input, using the regions recorded by the last render
    pub(crate) fn click(&mut self, column: u16, row: u16) -> PickerOutput {
        let Some(hitbox) = self.hitbox else {
            return PickerOutput::Ok;
        };
        let pos = Position::new(column, row);
        if hitbox.button.contains(pos) {
            return self.handle_input(PickerInput::Toggle);
        }
        if let Some(panel) = hitbox.panel.filter(|_| self.is_open()) {
            if panel.previous.contains(pos) {
                return self.handle_input(PickerInput::PreviousMonth);
            } else if panel.next.contains(pos) {
                return self.handle_input(PickerInput::NextMonth);
            } else if let Some(cell) = panel.cell_index(pos).and_then(|i| self.grid.get(i)) {
                return self.handle_input(PickerInput::Pick(cell.date));
            } else if panel.area.contains(pos) {
                return PickerOutput::Ok;
            }
        }
        if hitbox.contains(pos) {
            PickerOutput::Ok
        } else {
            self.handle_input(PickerInput::Dismiss)
        }
    }

    pub(super) fn set_hitbox(&mut self, hitbox: Hitbox) {
        self.hitbox = Some(hitbox);
    }

    fn set_view(&mut self, month: YearMonth) {
        if month != self.grid.month() {
            log::debug!("Date picker now showing {month}");
            self.grid = build_grid(month);
        }
    }

    fn navigate(
        &mut self,
        step: fn(YearMonth) -> Result<YearMonth, OutOfTimeError>,
    ) -> PickerOutput {
        match step(self.view()) {
            Ok(month) => {
                self.cursor = month.clamp_day(self.cursor.day());
                self.set_view(month);
                PickerOutput::Ok
            }
            Err(e) => {
                log::debug!("Cannot navigate from {}: {e}", self.view());
                PickerOutput::Invalid
            }
        }
    }

    fn move_cursor(&mut self, days: i64) -> PickerOutput {
        if !self.is_open() {
            return PickerOutput::Invalid;
        }
        let Some(cursor) = self.cursor.checked_add(Duration::days(days)) else {
            return PickerOutput::Invalid;
        };
        if !self.view().contains(cursor) {
            let Ok(month) = YearMonth::containing(cursor) else {
                return PickerOutput::Invalid;
            };
            self.set_view(month);
        }
        self.cursor = cursor;
        PickerOutput::Ok
    }

    // Closes regardless of whether the owner accepts the date; a rejected
    // date leaves the picker closed on its current view.
    fn select(&mut self, date: Date) -> PickerOutput {
        log::debug!("Date picker selected {date}");
        self.state = PickerState::Closed;
        PickerOutput::Select(date)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum PickerState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PickerInput {
    /// The display button was activated
    Toggle,
    /// Something outside of the picker was interacted with
    Dismiss,
    PreviousMonth,
    NextMonth,
    Left,
    Right,
    Up,
    Down,
    /// Select the date under the cursor
    Confirm,
    /// Select the given date directly
    Pick(Date),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PickerOutput {
    Ok,
    Invalid,
    Select(Date),
}

/// Screen regions of the picker as of its most recent render
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Hitbox {
    /// The full-width lines holding the label and the button
    pub(super) header: Rect,
    pub(super) button: Rect,
    pub(super) panel: Option<PanelHitbox>,
}

impl Hitbox {
    /// Whether `pos` counts as inside the picker, i.e., on the label or button
    /// lines or on the panel while it is shown
    fn contains(&self, pos: Position) -> bool {
        self.header.contains(pos) || self.panel.is_some_and(|p| p.area.contains(pos))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct PanelHitbox {
    pub(super) area: Rect,
    pub(super) previous: Rect,
    pub(super) next: Rect,
    /// Area covered by the day grid, one row per week and `CELL_WIDTH`
    /// columns per day
    pub(super) cells: Rect,
}

impl PanelHitbox {
    fn cell_index(&self, pos: Position) -> Option<usize> {
        if !self.cells.contains(pos) {
            return None;
        }
        let col = usize::from((pos.x - self.cells.x) / CELL_WIDTH);
        let row = usize::from(pos.y - self.cells.y);
        (col < DAYS_IN_WEEK).then_some(row * DAYS_IN_WEEK + col)
    }
}
