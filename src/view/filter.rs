//! Day filter, text search and time ordering

use crate::data::{Passenger, Weekday};

/// Passengers scheduled on `day`, in collection order
pub fn filter_by_day(records: &[Passenger], day: Weekday) -> Vec<&Passenger> {
    records.iter().filter(|r| r.day == day).collect()
}

/// Search used by the check-in view.
///
/// Names match case-insensitively; serial numbers match as typed.
pub fn matches_search(passenger: &Passenger, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    passenger
        .name
        .to_lowercase()
        .contains(&term.to_lowercase())
        || passenger.serial_number.contains(term)
}

/// Stable ascending sort on the `HH:MM` text.
///
/// Plain string order equals clock order only because times are zero-padded.
pub fn sort_by_time(records: &mut [&Passenger]) {
    records.sort_by(|a, b| a.time.cmp(&b.time));
}

/// The day's schedule as shown to drivers: filtered by day, sorted by time,
/// then narrowed by the optional search term.
pub fn day_schedule<'a>(
    records: &'a [Passenger],
    day: Weekday,
    search: Option<&str>,
) -> Vec<&'a Passenger> {
    let mut schedule = filter_by_day(records, day);
    sort_by_time(&mut schedule);
    match search.map(str::trim).filter(|term| !term.is_empty()) {
        Some(term) => schedule
            .into_iter()
            .filter(|p| matches_search(p, term))
            .collect(),
        None => schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(serial: &str, name: &str, time: &str, day: Weekday) -> Passenger {
        let mut p = Passenger::new(serial, name, "Eki", "Dai 1", time, day);
        p.id = format!("id-{serial}");
        p
    }

    fn names(records: &[&Passenger]) -> Vec<String> {
        records.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_day_filter() {
        let records = vec![
            passenger("1", "Mon A", "05:00", Weekday::Monday),
            passenger("2", "Tue B", "09:00", Weekday::Tuesday),
            passenger("3", "Tue A", "08:00", Weekday::Tuesday),
        ];

        let tuesday = day_schedule(&records, Weekday::Tuesday, None);
        assert_eq!(names(&tuesday), vec!["Tue A", "Tue B"]);
        assert!(day_schedule(&records, Weekday::Sunday, None).is_empty());
    }

    #[test]
    fn test_time_sort_is_stable() {
        let records = vec![
            passenger("1", "Late", "13:20", Weekday::Monday),
            passenger("2", "First 4:20", "04:20", Weekday::Monday),
            passenger("3", "Early", "03:10", Weekday::Monday),
            passenger("4", "Second 4:20", "04:20", Weekday::Monday),
        ];

        let mut view = filter_by_day(&records, Weekday::Monday);
        sort_by_time(&mut view);
        assert_eq!(
            names(&view),
            vec!["Early", "First 4:20", "Second 4:20", "Late"]
        );
    }

    #[test]
    fn test_search_name_case_insensitive() {
        let p = passenger("24", "Niru Dhakal Kharel", "05:20", Weekday::Monday);
        assert!(matches_search(&p, "dhakal"));
        assert!(matches_search(&p, "NIRU"));
        assert!(!matches_search(&p, "kamal"));
    }

    #[test]
    fn test_search_serial_substring() {
        let p = passenger("T12", "John", "08:00", Weekday::Tuesday);
        assert!(matches_search(&p, "T1"));
        assert!(matches_search(&p, "12"));
        assert!(!matches_search(&p, "t9"));
    }

    #[test]
    fn test_blank_search_keeps_everything() {
        let records = vec![
            passenger("1", "A", "05:00", Weekday::Monday),
            passenger("2", "B", "06:00", Weekday::Monday),
        ];
        assert_eq!(day_schedule(&records, Weekday::Monday, Some("  ")).len(), 2);
        assert_eq!(day_schedule(&records, Weekday::Monday, Some("b")).len(), 1);
    }
}
