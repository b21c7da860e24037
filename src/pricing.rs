//! Price estimation for routed legs.
//!
//! Amounts are in thousandths of the currency unit. Breakdown fields are
//! rounded individually for display; a leg's estimated price rounds the
//! unrounded sum once.

use tracing::debug;

use crate::haversine::km_to_minutes;
use crate::model::{
    OptionEstimate, PriceBreakdown, PricedLeg, PricingOption, PricingSchedule, PricingSchedules,
    RoutedLeg, TripPriceEstimate,
};

#[derive(Debug, Clone)]
pub struct PricingOptions {
    /// Booking minutes that are not charged at the start of every leg.
    pub free_booking_minutes: f64,
    /// Assumed average urban driving speed used to derive driving minutes.
    pub average_speed_kmh: f64,
}

impl Default for PricingOptions {
    fn default() -> Self {
        Self {
            free_booking_minutes: 15.0,
            average_speed_kmh: 30.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PriceCalculator {
    pub options: PricingOptions,
}

impl PriceCalculator {
    pub fn new(options: PricingOptions) -> Self {
        Self { options }
    }

    /// Price one leg. `pause_minutes` is the idle time before the same
    /// vehicle is used again; it is charged as given, even when negative.
    pub fn price_leg(
        &self,
        leg: &RoutedLeg,
        schedule: &PricingSchedule,
        pause_minutes: f64,
    ) -> PricedLeg {
        let unlock_fee = if leg.has_drive() { schedule.unlock_fee } else { 0 };

        let booking_minutes = (leg.duration_minutes() - self.options.free_booking_minutes).max(0.0);
        let booking_price = booking_minutes * schedule.book_unit_price as f64;

        let drive_km = leg.drive_distance() / 1000.0;
        let driving_minutes = km_to_minutes(drive_km, self.options.average_speed_kmh);
        let minute_price = driving_minutes * schedule.minute_price as f64;

        let excess_km = (drive_km - schedule.included_kilometers as f64).max(0.0);
        let kilometer_price = excess_km * schedule.kilometer_price as f64;

        let pause_price = pause_minutes * schedule.pause_unit_price as f64;

        let total =
            unlock_fee as f64 + booking_price + minute_price + kilometer_price + pause_price;

        PricedLeg {
            estimated_price: round_amount(total),
            price_breakdown: PriceBreakdown {
                book_unit_price: round_amount(booking_price),
                pause_unit_price: round_amount(pause_price),
                unlock_fee,
                minute_price: round_amount(minute_price),
                kilometer_price: round_amount(kilometer_price),
            },
        }
    }

    /// Price every leg of a trip under one schedule.
    pub fn price_trip(
        &self,
        legs: &[RoutedLeg],
        schedule: &PricingSchedule,
        pricing_type: PricingOption,
    ) -> OptionEstimate {
        let priced: Vec<PricedLeg> = legs
            .iter()
            .enumerate()
            .map(|(i, leg)| {
                let pause = pause_minutes(leg, legs.get(i + 1));
                self.price_leg(leg, schedule, pause)
            })
            .collect();
        let estimated_price: i64 = priced.iter().map(|leg| leg.estimated_price).sum();
        debug!(?pricing_type, estimated_price, "priced trip");

        OptionEstimate {
            pricing_type,
            estimated_price,
            legs: priced,
        }
    }

    /// Price a trip under both schedules and pick the cheaper one.
    /// Ties go to per-kilometer.
    pub fn estimate(&self, legs: &[RoutedLeg], schedules: &PricingSchedules) -> TripPriceEstimate {
        let (per_kilometer, per_minute) = rayon::join(
            || self.price_trip(legs, &schedules.per_kilometer, PricingOption::PerKilometer),
            || self.price_trip(legs, &schedules.per_minute, PricingOption::PerMinute),
        );

        let cheapest_option = if per_kilometer.estimated_price <= per_minute.estimated_price {
            PricingOption::PerKilometer
        } else {
            PricingOption::PerMinute
        };

        TripPriceEstimate {
            per_kilometer,
            per_minute,
            cheapest_option,
        }
    }
}

/// Idle minutes between `leg` and `next` when both use the same vehicle.
/// Overlapping legs give a negative value, which is passed through.
pub fn pause_minutes(leg: &RoutedLeg, next: Option<&RoutedLeg>) -> f64 {
    let Some(next) = next else {
        return 0.0;
    };
    match (leg.vehicle_id(), next.vehicle_id()) {
        (Some(current), Some(next_id)) if current == next_id => {
            (next.start_time - leg.end_time) as f64 / 60_000.0
        }
        _ => 0.0,
    }
}

/// Round half toward positive infinity.
fn round_amount(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
