use crate::theme::{
    jumpto::{READY_ENTER_STYLE, UNFILLED_CELL_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use time::{format_description::FormatItem, macros::format_description, Date};

pub(crate) static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

const OUTER_WIDTH: u16 = 17;
const OUTER_HEIGHT: u16 = 8;

/// Number of digits in a complete YYYYMMDD entry
const DIGITS: usize = 8;

/// Placeholder shown for each digit position not yet typed
static PLACEHOLDER: [char; DIGITS] = ['R', 'R', 'R', 'R', 'M', 'M', 'D', 'D'];

/// Dialog for typing in a date to make the selected date
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct JumpTo;

impl StatefulWidget for JumpTo {
    type State = JumpToState;

    /*
     * .................
     * .┌ Idź do daty ┐.
     * .│             │.
     * .│ -RRRR-MM-DD │.
     * .│             │.
     * .│   [ENTER]   │.
     * .└─────────────┘.
     * .................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title("Idź do daty")
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text().render(text_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct JumpToState {
    negative: bool,
    digits: [u8; DIGITS],
    len: usize,
}

impl JumpToState {
    pub(crate) fn new() -> JumpToState {
        JumpToState::default()
    }

    fn complete(&self) -> bool {
        self.len == DIGITS
    }

    fn to_text(self) -> Text<'static> {
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            self.to_line(),
            Line::styled("", BASE_STYLE),
            // Only the "[ENTER]" text, not its centering padding, should be
            // underlined, so style a span rather than the whole line.
            Line::from(Span::styled(
                "[ENTER]",
                if self.complete() {
                    READY_ENTER_STYLE
                } else {
                    BASE_STYLE
                },
            )),
        ])
        .centered()
    }

    fn to_line(self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            if self.negative { "-" } else { " " },
            BASE_STYLE,
        )];
        for (i, placeholder) in PLACEHOLDER.into_iter().enumerate() {
            if i == 4 || i == 6 {
                spans.push(Span::styled("-", BASE_STYLE));
            }
            spans.push(match self.digits.get(i).filter(|_| i < self.len) {
                Some(d) => Span::styled(d.to_string(), BASE_STYLE),
                None => Span::styled(placeholder.to_string(), UNFILLED_CELL_STYLE),
            });
        }
        Line::from(spans)
    }

    fn entered(&self) -> String {
        let mut s = String::with_capacity(DIGITS + 3);
        if self.negative {
            s.push('-');
        }
        for (i, d) in self.digits.iter().enumerate() {
            if i == 4 || i == 6 {
                s.push('-');
            }
            s.push(char::from(b'0' + d));
        }
        s
    }

    pub(crate) fn handle_input(&mut self, input: JumpToInput) -> JumpToOutput {
        match input {
            JumpToInput::Negative if self.len == 0 => {
                self.negative = !self.negative;
                JumpToOutput::Ok
            }
            JumpToInput::Positive if self.len == 0 => {
                self.negative = false;
                JumpToOutput::Ok
            }
            JumpToInput::Digit(d) if d < 10 && !self.complete() => {
                if let Some(slot) = self.digits.get_mut(self.len) {
                    *slot = d;
                    self.len += 1;
                }
                JumpToOutput::Ok
            }
            JumpToInput::Backspace if self.len > 0 => {
                self.len -= 1;
                JumpToOutput::Ok
            }
            JumpToInput::Enter if self.complete() => match Date::parse(&self.entered(), &YMD_FMT) {
                Ok(date) => JumpToOutput::Jump(date),
                Err(e) => {
                    log::debug!("Rejected date entry {:?}: {e}", self.entered());
                    JumpToOutput::Invalid
                }
            },
            _ => JumpToOutput::Invalid,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToInput {
    Negative,
    Positive,
    Digit(u8),
    Backspace,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToOutput {
    Ok,
    Invalid,
    Jump(Date),
}
