use crate::calendar::{DatePicker, OutOfTimeError, PickerInput, PickerOutput, PickerWidget};
use crate::header::Header;
use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::locale::LocaleFormatter;
use crate::namedays::{NameDayTable, NameLookup};
use crate::namelist::NameList;
use crate::theme::BASE_STYLE;
use crossterm::event::{
    poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use std::time::Duration;
use time::Date;

/// Maximum width of the interface; wider terminals get blank margins
const MAX_WIDTH: u16 = 60;

/// How long to wait for input before checking whether the date has changed
const CLOCK_TICK: Duration = Duration::from_secs(30);

/// Source of the current local date.  `None` means the date could not be
/// determined, in which case the last known date stays in effect.
pub(crate) type Clock = fn() -> Option<Date>;

/// Owner of the selected date.  Everything else on screen is derived from it:
/// the name list is looked up from it, and the date picker is resynchronized
/// to it whenever it changes.
#[derive(Clone, Debug)]
pub(crate) struct App<L> {
    clock: Clock,
    today: Date,
    selected: Date,
    table: NameDayTable,
    names: NameLookup,
    picker: DatePicker,
    locale: L,
    state: AppState,
}

impl<L: LocaleFormatter> App<L> {
    pub(crate) fn new(
        clock: Clock,
        today: Date,
        selected: Date,
        table: NameDayTable,
        locale: L,
    ) -> Result<App<L>, OutOfTimeError> {
        Ok(App {
            clock,
            today,
            selected,
            table,
            names: NameLookup::new(&table, selected),
            picker: DatePicker::new(selected)?,
            locale,
            state: AppState::Main,
        })
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        log::info!("Starting with {} selected", self.selected);
        while !self.quitting() {
            self.refresh_today();
            self.draw(terminal)?;
            if poll(CLOCK_TICK)? {
                self.handle_event(read()?)?;
            }
        }
        Ok(())
    }

    /// Re-read the current date so that the "today" highlight and the
    /// jump-to-today key follow the clock past midnight
    fn refresh_today(&mut self) {
        if let Some(today) = (self.clock)().filter(|&d| d != self.today) {
            log::info!("Date changed from {} to {today}", self.today);
            self.today = today;
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> io::Result<()> {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => {
                let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
                if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                    self.state = AppState::Quitting;
                } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                    self.beep()?;
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if !self.handle_click(column, row) {
                    self.beep()?;
                }
            }
            Event::FocusLost => {
                self.picker.handle_input(PickerInput::Dismiss);
            }
            // Anything else (including a resize) just causes a redraw
            _ => (),
        }
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Main => {
                self.refresh_today();
                self.handle_main_key(key)
            }
            AppState::Helping => {
                self.state = AppState::Main;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Main;
                    return true;
                }
                let output = match key {
                    KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                    KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                    KeyCode::Char(c) => match c.to_digit(10).and_then(|d| u8::try_from(d).ok()) {
                        Some(d) => state.handle_input(JumpToInput::Digit(d)),
                        None => JumpToOutput::Invalid,
                    },
                    KeyCode::Backspace | KeyCode::Delete => {
                        state.handle_input(JumpToInput::Backspace)
                    }
                    KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                    _ => JumpToOutput::Invalid,
                };
                match output {
                    JumpToOutput::Ok => true,
                    JumpToOutput::Invalid => false,
                    JumpToOutput::Jump(date) => {
                        self.state = AppState::Main;
                        self.select(date).is_ok()
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn handle_main_key(&mut self, key: KeyCode) -> bool {
        let open = self.picker.is_open();
        let input = match key {
            KeyCode::Char('q') => {
                self.state = AppState::Quitting;
                return true;
            }
            KeyCode::Esc if open => PickerInput::Dismiss,
            KeyCode::Esc => {
                self.state = AppState::Quitting;
                return true;
            }
            KeyCode::Enter | KeyCode::Char(' ') if open => PickerInput::Confirm,
            KeyCode::Enter | KeyCode::Char(' ') => PickerInput::Toggle,
            KeyCode::Left | KeyCode::Char('h') => PickerInput::Left,
            KeyCode::Right | KeyCode::Char('l') => PickerInput::Right,
            KeyCode::Up | KeyCode::Char('k') => PickerInput::Up,
            KeyCode::Down | KeyCode::Char('j') => PickerInput::Down,
            KeyCode::PageUp | KeyCode::Char('<') if open => PickerInput::PreviousMonth,
            KeyCode::PageDown | KeyCode::Char('>') if open => PickerInput::NextMonth,
            KeyCode::Char('0') | KeyCode::Home => return self.select(self.today).is_ok(),
            KeyCode::Char('g') => {
                // The dialog takes focus away from the picker
                self.picker.handle_input(PickerInput::Dismiss);
                self.state = AppState::Jumping(JumpToState::new());
                return true;
            }
            KeyCode::Char('?') => {
                self.state = AppState::Helping;
                return true;
            }
            _ => return false,
        };
        let output = self.picker.handle_input(input);
        self.apply(output)
    }

    // Returns `false` if the click did nothing useful
    fn handle_click(&mut self, column: u16, row: u16) -> bool {
        match self.state {
            AppState::Main => {
                let output = self.picker.click(column, row);
                self.apply(output)
            }
            AppState::Helping => {
                self.state = AppState::Main;
                true
            }
            AppState::Jumping(_) => true,
            AppState::Quitting => false,
        }
    }

    fn apply(&mut self, output: PickerOutput) -> bool {
        match output {
            PickerOutput::Ok => true,
            PickerOutput::Invalid => false,
            PickerOutput::Select(date) => self.select(date).is_ok(),
        }
    }

    /// Make `date` the selected date, updating everything derived from it
    fn select(&mut self, date: Date) -> Result<(), OutOfTimeError> {
        if let Err(e) = self.picker.sync(date) {
            log::warn!("Cannot select {date}: {e}");
            return Err(e);
        }
        self.selected = date;
        self.names.update(&self.table, date);
        log::info!("Selected {date} ({})", self.names.key());
        Ok(())
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl<L: LocaleFormatter> Widget for &mut App<L> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [main_area] = Layout::horizontal([MAX_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [header_area, _, picker_area, _, results_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(main_area);
        Header.render(header_area, buf);
        NameList::new(self.selected, self.names.names(), &self.locale).render(results_area, buf);
        // The picker's panel opens downwards over the name list
        let picker_area = Rect {
            height: main_area.bottom().saturating_sub(picker_area.y),
            ..picker_area
        };
        PickerWidget::new(self.selected, self.today, &self.locale).render(
            picker_area,
            buf,
            &mut self.picker,
        );
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Main,
    Helping,
    Jumping(JumpToState),
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::YearMonth;
    use crate::locale::Polish;
    use crate::namedays::tests::TEST_TABLE;
    use std::cell::Cell;
    use time::macros::date;
    use time::Month;

    thread_local! {
        static NOW: Cell<Option<Date>> = const { Cell::new(None) };
    }

    // Each test runs on its own thread, so each has its own clock
    fn test_clock() -> Option<Date> {
        NOW.with(Cell::get)
    }

    fn app(today: Date, selected: Date) -> App<Polish> {
        App::new(
            test_clock,
            today,
            selected,
            NameDayTable::new(&TEST_TABLE),
            Polish,
        )
        .unwrap()
    }

    fn render(app: &mut App<Polish>) -> Vec<String> {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn click(app: &mut App<Polish>, column: u16, row: u16) {
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
        .unwrap();
    }

    #[test]
    fn test_initial_names() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 01 - 01));
        assert_eq!(app.names.names(), ["Mieszko", "Marian"]);
        let rows = render(&mut app);
        assert!(rows[0].contains("Imieniny Dnia"));
        assert!(rows[1].contains("Sprawdź kto świętuje"));
        assert!(rows[3].contains("Wybierz datę"));
        assert!(rows[4].contains("[ 1 stycznia 2024 ▾ ]"));
        assert!(rows[6].contains("Imieniny 1 stycznia obchodzą:"));
        let badges = rows.iter().find(|r| r.contains("Mieszko")).unwrap();
        let mieszko = badges.find("Mieszko").unwrap();
        let marian = badges.find("Marian").unwrap();
        assert!(mieszko < marian, "badges out of order: {badges:?}");
    }

    #[test]
    fn test_no_names() {
        let mut app = app(date!(2024 - 12 - 31), date!(2024 - 01 - 01));
        assert!(app.handle_key(KeyCode::Home));
        assert_eq!(app.selected, date!(2024 - 12 - 31));
        assert!(app.names.names().is_empty());
        assert_eq!(
            app.picker.view(),
            YearMonth::new(2024, Month::December).unwrap()
        );
        let rows = render(&mut app);
        assert!(rows
            .iter()
            .any(|r| r.contains("Brak solenizantów w tym dniu.")));
    }

    #[test]
    fn test_select_in_other_month_with_keys() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 01 - 01));
        assert!(app.handle_key(KeyCode::Enter));
        assert!(app.picker.is_open());
        assert!(app.handle_key(KeyCode::PageDown));
        assert!(app.handle_key(KeyCode::Char('>')));
        assert_eq!(app.picker.view(), YearMonth::new(2024, Month::March).unwrap());
        assert_eq!(app.selected, date!(2024 - 01 - 01));
        assert!(app.handle_key(KeyCode::Right));
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.selected, date!(2024 - 03 - 02));
        assert_eq!(app.names.names(), ["Helena", "Halszka"]);
        assert!(!app.picker.is_open());
        assert!(app.handle_key(KeyCode::Char(' ')));
        assert!(app.picker.is_open());
        assert_eq!(app.picker.view(), YearMonth::new(2024, Month::March).unwrap());
        assert_eq!(app.picker.cursor(), date!(2024 - 03 - 02));
    }

    #[test]
    fn test_select_in_other_month_with_mouse() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 01 - 01));
        render(&mut app);
        // The button
        click(&mut app, 40, 4);
        assert!(app.picker.is_open());
        app.handle_key(KeyCode::PageDown);
        app.handle_key(KeyCode::PageDown);
        let rows = render(&mut app);
        assert!(rows[6].contains("Marzec 2024"));
        // Wednesday 2024-03-20 is in the fourth row and third column
        assert!(rows[11].contains(" 18  19  20 "));
        click(&mut app, 35, 11);
        assert_eq!(app.selected, date!(2024 - 03 - 20));
        assert!(!app.picker.is_open());
        assert!(app.names.names().is_empty());
        click(&mut app, 40, 4);
        assert!(app.picker.is_open());
        assert_eq!(app.picker.view(), YearMonth::new(2024, Month::March).unwrap());
    }

    #[test]
    fn test_click_outside_closes() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 01 - 01));
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::PageUp);
        render(&mut app);
        click(&mut app, 0, 23);
        assert!(!app.picker.is_open());
        assert_eq!(
            app.picker.view(),
            YearMonth::new(2023, Month::December).unwrap()
        );
        assert_eq!(app.selected, date!(2024 - 01 - 01));
    }

    #[test]
    fn test_focus_lost_closes() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 01 - 01));
        app.handle_key(KeyCode::Enter);
        app.handle_event(Event::FocusLost).unwrap();
        assert!(!app.picker.is_open());
        assert!(!app.quitting());
    }

    #[test]
    fn test_escape() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 01 - 01));
        app.handle_key(KeyCode::Enter);
        assert!(app.handle_key(KeyCode::Esc));
        assert!(!app.picker.is_open());
        assert!(!app.quitting());
        assert!(app.handle_key(KeyCode::Esc));
        assert!(app.quitting());
    }

    #[test]
    fn test_ctrl_c() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 01 - 01));
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();
        assert!(app.quitting());
    }

    #[test]
    fn test_cursor_keys_need_open_picker() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 01 - 01));
        assert!(!app.handle_key(KeyCode::Left));
        assert!(!app.handle_key(KeyCode::PageDown));
        assert!(!app.handle_key(KeyCode::Char('x')));
    }

    #[test]
    fn test_jump_to() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 03 - 15));
        app.handle_key(KeyCode::Enter);
        assert!(app.handle_key(KeyCode::Char('g')));
        assert!(!app.picker.is_open());
        for c in "20250101".chars() {
            assert!(app.handle_key(KeyCode::Char(c)));
        }
        let rows = render(&mut app);
        assert!(rows.iter().any(|r| r.contains("2025-01-01")));
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Main);
        assert_eq!(app.selected, date!(2025 - 01 - 01));
        assert_eq!(app.names.names(), ["Mieszko", "Marian"]);
        assert_eq!(
            app.picker.view(),
            YearMonth::new(2025, Month::January).unwrap()
        );
        assert!(!app.picker.is_open());
    }

    #[test]
    fn test_jump_to_end_of_time() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 03 - 15));
        app.handle_key(KeyCode::Char('g'));
        for c in "99991231".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        assert!(!app.handle_key(KeyCode::Enter));
        assert_eq!(app.selected, date!(2024 - 03 - 15));
    }

    #[test]
    fn test_help() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 03 - 15));
        assert!(app.handle_key(KeyCode::Char('?')));
        let rows = render(&mut app);
        assert!(rows.iter().any(|r| r.contains(" Klawisze ")));
        assert!(app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Main);
        let rows = render(&mut app);
        assert!(!rows.iter().any(|r| r.contains(" Klawisze ")));
    }

    #[test]
    fn test_today_highlight() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 03 - 01));
        app.handle_key(KeyCode::Enter);
        let rows = render(&mut app);
        assert!(rows.iter().any(|r| r.contains("[15]")));
    }

    #[test]
    fn test_today_follows_clock() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 03 - 01));
        app.handle_key(KeyCode::Enter);
        let rows = render(&mut app);
        assert!(rows.iter().any(|r| r.contains("[15]")));
        NOW.with(|now| now.set(Some(date!(2024 - 03 - 16))));
        app.refresh_today();
        let rows = render(&mut app);
        assert!(rows.iter().any(|r| r.contains("[16]")));
        assert!(!rows.iter().any(|r| r.contains("[15]")));
        app.handle_key(KeyCode::Esc);
        assert!(app.handle_key(KeyCode::Home));
        assert_eq!(app.selected, date!(2024 - 03 - 16));
    }

    #[test]
    fn test_home_reads_clock() {
        let mut app = app(date!(2024 - 12 - 31), date!(2024 - 06 - 01));
        NOW.with(|now| now.set(Some(date!(2025 - 01 - 01))));
        assert!(app.handle_key(KeyCode::Char('0')));
        assert_eq!(app.selected, date!(2025 - 01 - 01));
        assert_eq!(app.names.names(), ["Mieszko", "Marian"]);
    }

    #[test]
    fn test_clock_failure_keeps_today() {
        let mut app = app(date!(2024 - 03 - 15), date!(2024 - 03 - 01));
        NOW.with(|now| now.set(None));
        app.refresh_today();
        assert_eq!(app.today, date!(2024 - 03 - 15));
    }

    #[test]
    fn test_pick_past_end_of_time() {
        // The last representable month's trailing days cannot be selected;
        // the panel closes anyway and the selection stays put.
        let mut app = app(date!(2024 - 03 - 15), date!(9999 - 11 - 15));
        app.handle_key(KeyCode::Enter);
        render(&mut app);
        let last = app.picker.grid().weeks().next_back().unwrap()[6].date;
        assert_eq!(last.month(), Month::December);
        // Bottom right cell of the panel
        click(&mut app, 51, 13);
        assert!(!app.picker.is_open());
        assert_eq!(app.selected, date!(9999 - 11 - 15));
        assert_eq!(
            app.picker.view(),
            YearMonth::new(9999, Month::November).unwrap()
        );
    }
}
