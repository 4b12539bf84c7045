use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE
    .fg(Color::LightMagenta)
    .add_modifier(Modifier::BOLD);

pub(crate) const SUBTITLE_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) mod picker {
    use super::*;

    pub(crate) const LABEL_STYLE: Style = BASE_STYLE.fg(Color::Gray);

    pub(crate) const BUTTON_STYLE: Style = Style::new()
        .fg(Color::White)
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);

    pub(crate) const BUTTON_OPEN_STYLE: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);

    pub(crate) const PANEL_STYLE: Style = BASE_STYLE;

    pub(crate) const NAV_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.fg(Color::Gray);

    pub(crate) const OUTSIDE_MONTH_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const SELECTED_STYLE: Style = Style::new()
        .fg(Color::White)
        .bg(Color::Magenta)
        .add_modifier(Modifier::BOLD);

    pub(crate) const TODAY_STYLE: Style = BASE_STYLE.fg(Color::LightYellow);

    pub(crate) const PLAIN_DAY_STYLE: Style = BASE_STYLE;

    pub(crate) const CURSOR_MODIFIER: Modifier = Modifier::UNDERLINED;
}

pub(crate) mod namelist {
    use super::*;

    pub(crate) const HEADING_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const HEADING_DATE_STYLE: Style = BASE_STYLE
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);

    pub(crate) const BADGE_STYLE: Style = Style::new()
        .fg(Color::White)
        .bg(Color::Magenta)
        .add_modifier(Modifier::BOLD);

    pub(crate) const EMPTY_STYLE: Style = BASE_STYLE.fg(Color::Gray);
}

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}
