mod table;
use std::fmt;
use time::Date;

/// A static map from `MM-DD` keys to the names celebrated on that day, in
/// display order
pub(crate) type NameDayMap = phf::Map<&'static str, &'static [&'static str]>;

/// Lookup key into a [`NameDayTable`]: the zero-padded month and day of a
/// date, joined with a dash
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) struct NameDayKey(String);

impl NameDayKey {
    pub(crate) fn for_date(date: Date) -> NameDayKey {
        NameDayKey(format!("{:02}-{:02}", u8::from(date.month()), date.day()))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameDayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct NameDayTable {
    map: &'static NameDayMap,
}

impl NameDayTable {
    pub(crate) const fn new(map: &'static NameDayMap) -> NameDayTable {
        NameDayTable { map }
    }

    /// The traditional Polish name-day calendar
    pub(crate) fn polish() -> NameDayTable {
        NameDayTable::new(&table::POLISH)
    }

    /// Returns the names for the given key, or an empty slice if the table
    /// has no entry for it
    pub(crate) fn names(&self, key: &NameDayKey) -> &'static [&'static str] {
        self.map.get(key.as_str()).copied().unwrap_or_default()
    }
}

/// The names celebrated on a given date, recomputed only when the date's key
/// changes
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct NameLookup {
    key: NameDayKey,
    names: &'static [&'static str],
}

impl NameLookup {
    pub(crate) fn new(table: &NameDayTable, date: Date) -> NameLookup {
        let key = NameDayKey::for_date(date);
        let names = table.names(&key);
        NameLookup { key, names }
    }

    pub(crate) fn update(&mut self, table: &NameDayTable, date: Date) {
        let key = NameDayKey::for_date(date);
        if key != self.key {
            self.names = table.names(&key);
            log::debug!("Name day key {key} has {} names", self.names.len());
            self.key = key;
        }
    }

    pub(crate) fn key(&self) -> &NameDayKey {
        &self.key
    }

    pub(crate) fn names(&self) -> &'static [&'static str] {
        self.names
    }
}
