use std::ops::Range;
use std::sync::Arc;

use chrono::Datelike;

use delivery_hours_syntax::WeeklySchedule;

use crate::availability::{
    available_days_summary, effective_hours_label, is_delivery_available_at, next_available_day,
    NextAvailableDay,
};
use crate::document::{active_driver_schedules, DriverDocument, StoreHoursDocument};
use crate::effective::EffectiveSchedule;
use crate::localization::{Localize, NoLocation};
use crate::picker::{delivery_date_options, DeliveryDateOption};
use crate::projector::{slot_instant, AvailableDeliveryDate, DateProjector, ProjectionIter};
use crate::Context;

// DeliveryAvailability

/// Delivery availability of a store computed from one snapshot of its hours
/// and of its active drivers, together with an evaluation context.
///
/// It doesn't follow changes of its inputs: build a new one each time store
/// hours or drivers are fetched again. The effective schedule is wrapped in
/// an `Arc` so this is cheap to clone.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DeliveryAvailability<L: Localize = NoLocation> {
    schedule: Arc<EffectiveSchedule>,
    pub(crate) ctx: Context<L>,
}

impl DeliveryAvailability<NoLocation> {
    /// Intersect store hours with the availability of active drivers.
    ///
    /// ```
    /// use delivery_hours::DeliveryAvailability;
    /// use delivery_hours::syntax::WeeklySchedule;
    ///
    /// let store: WeeklySchedule = "Mo-Sa 09:00-20:00".parse().unwrap();
    /// let driver: WeeklySchedule = "Mo-Fr 11:00-15:00".parse().unwrap();
    /// let availability = DeliveryAvailability::new(&store, [&driver]);
    ///
    /// assert_eq!(availability.available_days(true), ["Mon", "Tue", "Wed", "Thu", "Fri"]);
    /// ```
    pub fn new<'d>(
        store: &WeeklySchedule,
        active_drivers: impl IntoIterator<Item = &'d WeeklySchedule>,
    ) -> Self {
        Self::from_schedule(EffectiveSchedule::compute(store, active_drivers))
    }

    /// Load store hours and drivers from their database records. Inactive
    /// drivers are ignored.
    pub fn from_documents<'d>(
        store: &StoreHoursDocument,
        drivers: impl IntoIterator<Item = &'d DriverDocument>,
    ) -> Self {
        let store = store.load();
        let drivers = active_driver_schedules(drivers);
        Self::new(&store, &drivers)
    }

    pub fn from_schedule(schedule: EffectiveSchedule) -> Self {
        Self { schedule: Arc::new(schedule), ctx: Context::default() }
    }
}

impl<L: Localize> DeliveryAvailability<L> {
    // --
    // -- Builder Methods
    // --

    /// Set a new evaluation context.
    ///
    /// ```
    /// use delivery_hours::{Context, DeliveryAvailability, EffectiveSchedule};
    /// use delivery_hours::localization::{Language, TzLocation};
    ///
    /// let availability = DeliveryAvailability::from_schedule(EffectiveSchedule::default())
    ///     .with_context(
    ///         Context::default()
    ///             .with_language(Language::Es)
    ///             .with_locale(TzLocation::new(chrono_tz::America::Mexico_City)),
    ///     );
    /// ```
    pub fn with_context<L2: Localize>(self, ctx: Context<L2>) -> DeliveryAvailability<L2> {
        DeliveryAvailability { schedule: self.schedule, ctx }
    }

    pub fn schedule(&self) -> &EffectiveSchedule {
        &self.schedule
    }

    pub fn context(&self) -> &Context<L> {
        &self.ctx
    }

    // --
    // -- Queries
    // --

    /// Check if a delivery slot is running at given time.
    pub fn is_available(&self, now: L::DateTime) -> bool {
        is_delivery_available_at(&self.schedule, self.ctx.locale.naive(now))
    }

    /// Delivery hours of the day of `now`, formatted for display.
    pub fn today_hours(&self, now: L::DateTime) -> String {
        let weekday = self.ctx.locale.naive(now).weekday();
        effective_hours_label(&self.schedule, weekday, self.ctx.language)
    }

    /// Names of the days with delivery slots, starting on Sunday.
    pub fn available_days(&self, abbreviated: bool) -> Vec<&'static str> {
        available_days_summary(&self.schedule, abbreviated, self.ctx.language)
    }

    /// First day of the week with delivery slots, starting from the day of
    /// `now`.
    pub fn next_available_day(&self, now: L::DateTime) -> Option<NextAvailableDay> {
        next_available_day(&self.schedule, self.ctx.locale.naive(now).weekday())
    }

    /// Iterate over available dates.
    pub fn iter_dates(
        &self,
        now: L::DateTime,
        projector: &DateProjector,
    ) -> ProjectionIter<'_, L> {
        projector.project_localized(&self.schedule, now, self.ctx.locale.clone())
    }

    /// List available dates.
    pub fn dates(&self, now: L::DateTime, projector: &DateProjector) -> Vec<AvailableDeliveryDate> {
        self.iter_dates(now, projector).collect()
    }

    /// Date picker entries for the `count` closest available dates.
    pub fn date_options(
        &self,
        now: L::DateTime,
        projector: &DateProjector,
        count: usize,
    ) -> Vec<DeliveryDateOption> {
        delivery_date_options(self.iter_dates(now, projector), count, self.ctx.language)
    }

    /// Get the next slot that can be ordered for.
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use delivery_hours::{DateProjector, DeliveryAvailability};
    /// use delivery_hours::syntax::WeeklySchedule;
    ///
    /// let store: WeeklySchedule = "Mo-Fr 09:00-17:00".parse().unwrap();
    /// let driver: WeeklySchedule = "Mo-Su 12:00-22:00".parse().unwrap();
    /// let availability = DeliveryAvailability::new(&store, [&driver]);
    ///
    /// let datetime = |raw| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").unwrap();
    /// let slot = availability.next_slot(datetime("2025-10-24 13:00"), &DateProjector::new(7, 2));
    /// assert_eq!(slot, Some(datetime("2025-10-27 12:00")..datetime("2025-10-27 17:00")));
    /// ```
    pub fn next_slot(
        &self,
        now: L::DateTime,
        projector: &DateProjector,
    ) -> Option<Range<L::DateTime>> {
        let locale = &self.ctx.locale;

        self.iter_dates(now, projector)
            .flat_map(|date| {
                let day = date.date;
                date.slots.into_iter().map(move |slot| (day, slot))
            })
            .find_map(|(day, slot)| {
                let start = locale.datetime(slot_instant(day, slot.open())?);
                let end = locale.datetime(slot_instant(day, slot.close())?);

                // Slots entirely skipped by a DST transition are empty
                (locale.naive_utc(&start) < locale.naive_utc(&end)).then_some(start..end)
            })
    }
}
