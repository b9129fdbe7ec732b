use crate::errors::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// 1 is Monday, 7 is Sunday.
    pub fn from_number(day: i32) -> Result<Self, ServiceError> {
        usize::try_from(day)
            .ok()
            .and_then(|d| d.checked_sub(1))
            .and_then(|i| WEEK.get(i))
            .copied()
            .ok_or_else(|| ServiceError::Schedule(format!("could not convert day number [dayNumber: {day}] to day")))
    }

    #[cfg(test)]
    pub fn number(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }

    #[cfg(test)]
    pub fn from_name(name: &str) -> Option<Self> {
        WEEK.iter().copied().find(|d| d.name() == name)
    }
}

/// `HH:MM:SS` to `HH:MM`. Anything shorter than six bytes is rejected.
pub fn trim_seconds(time: &str) -> Result<&str, ServiceError> {
    let invalid = || ServiceError::Schedule(format!("could not trim seconds from time [time: {time}]"));
    if time.len() < 6 {
        return Err(invalid());
    }
    time.get(..time.len() - 3).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_numbers_round_trip() {
        assert_eq!(Weekday::from_number(1).unwrap().name(), "Lunes");
        assert_eq!(Weekday::from_number(7).unwrap().name(), "Domingo");
        for day in 1..=7 {
            let wd = Weekday::from_number(day).unwrap();
            assert_eq!(wd.number(), day);
            assert_eq!(Weekday::from_name(wd.name()), Some(wd));
        }
    }

    #[test]
    fn out_of_range_days_fail() {
        for day in [0, 8, -1, i32::MAX] {
            let err = Weekday::from_number(day).unwrap_err();
            assert!(matches!(err, ServiceError::Schedule(_)));
        }
        assert_eq!(Weekday::from_name("Monday"), None);
    }

    #[test]
    fn trims_seconds() {
        assert_eq!(trim_seconds("17:00:00").unwrap(), "17:00");
        assert_eq!(trim_seconds("9:00:00").unwrap(), "9:00");
        assert!(trim_seconds("17").is_err());
        assert!(trim_seconds("17:00").is_err());
    }

    #[test]
    fn weekdays_order_monday_first() {
        assert!(Weekday::Monday < Weekday::Tuesday);
        assert!(Weekday::Saturday < Weekday::Sunday);
    }
}
