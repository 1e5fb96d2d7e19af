use crate::models::MonthlyActivity;

/// One bar of a dashboard bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u32,
    /// Height relative to the tallest bar, 0..=100.
    pub percent: u8,
}

/// `value` as a percentage of `max`, rounded to the nearest integer.
/// A zero `max` yields 0.
pub fn percent_of_max(value: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let value = value.min(max) as u64;
    ((value * 100 + max as u64 / 2) / max as u64) as u8
}

/// Scale one series of the activity data into bars.
pub fn bars(activity: &[MonthlyActivity], series: impl Fn(&MonthlyActivity) -> u32) -> Vec<Bar> {
    let max = activity.iter().map(&series).max().unwrap_or(0);
    activity
        .iter()
        .map(|month| {
            let value = series(month);
            Bar {
                label: month.month.clone(),
                value,
                percent: percent_of_max(value, max),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_percent_of_max() {
        assert_eq!(percent_of_max(0, 0), 0);
        assert_eq!(percent_of_max(5, 0), 0);
        assert_eq!(percent_of_max(50, 100), 50);
        assert_eq!(percent_of_max(1, 3), 33);
        assert_eq!(percent_of_max(2, 3), 67);
        assert_eq!(percent_of_max(10, 10), 100);
        assert_eq!(percent_of_max(20, 10), 100);
    }

    #[test]
    fn test_bars_scale_to_tallest() {
        let activity = AppConfig::bundled().unwrap().activity;
        let books = bars(&activity, |m| m.books);
        assert_eq!(books.len(), 5);
        assert_eq!(books[0].label, "Jan");
        assert_eq!(books[4].percent, 100);
        assert_eq!(books[0].percent, 68);

        let subjects = bars(&activity, |m| m.subjects);
        assert_eq!(subjects[4].value, 190);
        assert_eq!(subjects[4].percent, 100);
    }

    #[test]
    fn test_bars_empty() {
        assert!(bars(&[], |m| m.books).is_empty());
    }
}
