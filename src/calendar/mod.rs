mod grid;
mod month;
mod picker;
mod widget;
pub(crate) use self::grid::DAYS_IN_WEEK;
pub(crate) use self::month::{OutOfTimeError, YearMonth};
pub(crate) use self::picker::{DatePicker, PickerInput, PickerOutput};
pub(crate) use self::widget::PickerWidget;
