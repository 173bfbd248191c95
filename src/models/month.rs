use serde::Serialize;

/// Calendar month. Stored in the DB as the lowercase English name,
/// which is also the form accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

pub const ALL_MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Convert enum → DB string (lowercase name)
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "january" => Some(Month::January),
            "february" => Some(Month::February),
            "march" => Some(Month::March),
            "april" => Some(Month::April),
            "may" => Some(Month::May),
            "june" => Some(Month::June),
            "july" => Some(Month::July),
            "august" => Some(Month::August),
            "september" => Some(Month::September),
            "october" => Some(Month::October),
            "november" => Some(Month::November),
            "december" => Some(Month::December),
            _ => None,
        }
    }

    /// Helper: parse CLI input (any case, full name or number 1-12)
    pub fn from_input(s: &str) -> Option<Self> {
        if let Ok(n) = s.parse::<u32>() {
            return Self::from_number(n);
        }
        Month::from_db_str(&s.to_lowercase())
    }

    pub fn from_number(n: u32) -> Option<Self> {
        ALL_MONTHS.get(n.checked_sub(1)? as usize).copied()
    }

    /// Month number 1-12
    pub fn number(&self) -> u32 {
        ALL_MONTHS.iter().position(|m| m == self).unwrap() as u32 + 1
    }

    /// Capitalized display name ("January")
    pub fn display_name(&self) -> String {
        let s = self.to_db_str();
        let mut c = s.chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_string_round_trip() {
        for m in ALL_MONTHS {
            assert_eq!(Month::from_db_str(m.to_db_str()), Some(m));
        }
    }

    #[test]
    fn parse_input_forms() {
        assert_eq!(Month::from_input("august"), Some(Month::August));
        assert_eq!(Month::from_input("August"), Some(Month::August));
        assert_eq!(Month::from_input("8"), Some(Month::August));
        assert_eq!(Month::from_input("13"), None);
        assert_eq!(Month::from_input("augusts"), None);
    }

    #[test]
    fn display_name_is_capitalized() {
        assert_eq!(Month::January.display_name(), "January");
    }
}
