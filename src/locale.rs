use crate::calendar::{YearMonth, DAYS_IN_WEEK};
use time::{Date, Month};

/// Produces the human-readable date strings shown in the interface
pub(crate) trait LocaleFormatter {
    /// Day, long month name, and year, e.g., for the picker's button
    fn long_date(&self, date: Date) -> String;

    /// Day and long month name, without the year
    fn day_and_month(&self, date: Date) -> String;

    /// Title for a month as shown above its grid
    fn month_and_year(&self, month: YearMonth) -> String;

    /// Abbreviated weekday names, starting with Monday
    fn weekday_abbreviations(&self) -> [&'static str; DAYS_IN_WEEK];
}

impl<T: LocaleFormatter + ?Sized> LocaleFormatter for &T {
    fn long_date(&self, date: Date) -> String {
        (**self).long_date(date)
    }

    fn day_and_month(&self, date: Date) -> String {
        (**self).day_and_month(date)
    }

    fn month_and_year(&self, month: YearMonth) -> String {
        (**self).month_and_year(month)
    }

    fn weekday_abbreviations(&self) -> [&'static str; DAYS_IN_WEEK] {
        (**self).weekday_abbreviations()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Polish;

impl Polish {
    // Month names are declined: a date ("16 października") uses the genitive,
    // while a month on its own ("Październik") uses the nominative.
    fn genitive(month: Month) -> &'static str {
        match month {
            Month::January => "stycznia",
            Month::February => "lutego",
            Month::March => "marca",
            Month::April => "kwietnia",
            Month::May => "maja",
            Month::June => "czerwca",
            Month::July => "lipca",
            Month::August => "sierpnia",
            Month::September => "września",
            Month::October => "października",
            Month::November => "listopada",
            Month::December => "grudnia",
        }
    }

    fn nominative(month: Month) -> &'static str {
        match month {
            Month::January => "Styczeń",
            Month::February => "Luty",
            Month::March => "Marzec",
            Month::April => "Kwiecień",
            Month::May => "Maj",
            Month::June => "Czerwiec",
            Month::July => "Lipiec",
            Month::August => "Sierpień",
            Month::September => "Wrzesień",
            Month::October => "Październik",
            Month::November => "Listopad",
            Month::December => "Grudzień",
        }
    }
}

impl LocaleFormatter for Polish {
    fn long_date(&self, date: Date) -> String {
        format!(
            "{} {} {}",
            date.day(),
            Polish::genitive(date.month()),
            date.year()
        )
    }

    fn day_and_month(&self, date: Date) -> String {
        format!("{} {}", date.day(), Polish::genitive(date.month()))
    }

    fn month_and_year(&self, month: YearMonth) -> String {
        format!("{} {}", Polish::nominative(month.month()), month.year())
    }

    fn weekday_abbreviations(&self) -> [&'static str; DAYS_IN_WEEK] {
        ["Pn", "Wt", "Śr", "Cz", "Pt", "So", "Nd"]
    }
}
