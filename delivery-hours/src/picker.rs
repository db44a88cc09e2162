use crate::localization::Language;
use crate::projector::AvailableDeliveryDate;

/// An available date as an entry of a date picker.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DeliveryDateOption {
    /// Human readable name of the date
    pub label: String,
    /// The date formatted as `YYYY-MM-DD`
    pub value: String,
    pub date: AvailableDeliveryDate,
}

impl DeliveryDateOption {
    pub fn new(date: AvailableDeliveryDate, language: Language) -> Self {
        let label = {
            if date.is_today {
                language.today().to_string()
            } else if date.is_tomorrow {
                language.tomorrow().to_string()
            } else {
                language.format_date(date.date)
            }
        };

        Self { label, value: date.iso_date(), date }
    }
}

/// Build picker entries for the `count` closest available dates.
///
/// ```
/// use chrono::NaiveDateTime;
/// use delivery_hours::{DateProjector, EffectiveSchedule};
/// use delivery_hours::localization::Language;
/// use delivery_hours::picker::delivery_date_options;
/// use delivery_hours::syntax::WeeklySchedule;
///
/// let hours: WeeklySchedule = "Mo-Fr 09:00-17:00".parse().unwrap();
/// let effective = EffectiveSchedule::from(hours);
/// let now = NaiveDateTime::parse_from_str("2025-10-20 08:00", "%Y-%m-%d %H:%M").unwrap();
/// let dates = DateProjector::new(14, 0).project(&effective, now);
///
/// let options = delivery_date_options(dates, 3, Language::En);
/// let labels: Vec<_> = options.iter().map(|opt| opt.label.as_str()).collect();
/// assert_eq!(labels, ["Today", "Tomorrow", "Wednesday, October 22"]);
/// assert_eq!(options[2].value, "2025-10-22");
/// ```
pub fn delivery_date_options(
    dates: impl IntoIterator<Item = AvailableDeliveryDate>,
    count: usize,
    language: Language,
) -> Vec<DeliveryDateOption> {
    dates
        .into_iter()
        .take(count)
        .map(|date| DeliveryDateOption::new(date, language))
        .collect()
}
