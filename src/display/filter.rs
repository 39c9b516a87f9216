use chrono::NaiveDate;

use crate::display::models::Activity;

/// Keep the activities whose display window contains `today`, in input order.
/// The check is at day granularity: an activity starting today is already
/// showing, one ending today keeps showing until the end of the day.
pub fn current_activities(activities: &[Activity], today: NaiveDate) -> Vec<Activity> {
    activities
        .iter()
        .filter(|activity| is_current(activity, today))
        .cloned()
        .collect()
}

/// Same window check, restricted to activities tagged with the given study year.
pub fn current_activities_for_year(
    activities: &[Activity],
    today: NaiveDate,
    year: u8,
) -> Vec<Activity> {
    activities
        .iter()
        .filter(|activity| activity.year == Some(year) && is_current(activity, today))
        .cloned()
        .collect()
}

fn is_current(activity: &Activity, today: NaiveDate) -> bool {
    activity.start_date.date_naive() <= today && today <= activity.end_date.date_naive()
}
