//! Caller-facing trip planning and price estimation.
//!
//! Wraps the router and price calculator around a [`MobilityDataProvider`].
//! Vehicle and zone feeds are read concurrently for each leg; the legs
//! themselves are always routed one after the other.

use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};

use crate::error::PlannerError;
use crate::model::{Leg, RoutedLeg, TripPlan, TripPriceEstimate};
use crate::pricing::PriceCalculator;
use crate::router::{LegRouter, VehiclePositions};
use crate::selector::NearestVertex;
use crate::traits::{MobilityDataProvider, ZoneDistance};

#[derive(Debug, Clone, Default)]
pub struct PlannerOptions {
    /// Budget for a whole `plan_trip` call, checked before each leg.
    pub deadline: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct JourneyPlanner<P, Z = NearestVertex> {
    provider: P,
    router: LegRouter<Z>,
    pricing: PriceCalculator,
    options: PlannerOptions,
}

impl<P> JourneyPlanner<P>
where
    P: MobilityDataProvider + Sync,
{
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            router: LegRouter::new(),
            pricing: PriceCalculator::default(),
            options: PlannerOptions::default(),
        }
    }
}

impl<P, Z> JourneyPlanner<P, Z>
where
    P: MobilityDataProvider + Sync,
    Z: ZoneDistance + Sync,
{
    pub fn with_options(mut self, options: PlannerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_pricing(mut self, pricing: PriceCalculator) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_router<Z2>(self, router: LegRouter<Z2>) -> JourneyPlanner<P, Z2>
    where
        Z2: ZoneDistance + Sync,
    {
        JourneyPlanner {
            provider: self.provider,
            router,
            pricing: self.pricing,
            options: self.options,
        }
    }

    /// Route `legs` in order against fresh provider reads for each leg.
    ///
    /// A deadline aborts between legs, never inside one, and the error
    /// carries the legs routed up to that point.
    #[instrument(skip_all, fields(legs = legs.len()))]
    pub fn plan_trip(&self, legs: &[Leg]) -> Result<TripPlan, PlannerError> {
        let started = Instant::now();
        let mut routed = Vec::with_capacity(legs.len());
        let mut positions = VehiclePositions::new();

        for leg in legs {
            if self
                .options
                .deadline
                .is_some_and(|deadline| started.elapsed() >= deadline)
            {
                warn!(completed_legs = routed.len(), "deadline exceeded");
                return Err(PlannerError::DeadlineExceeded {
                    partial: Box::new(TripPlan {
                        legs: routed,
                        updated_vehicle_positions: positions.to_positions(),
                    }),
                });
            }

            let (vehicles, zones) = rayon::join(
                || self.provider.list_vehicles(),
                || self.provider.list_parking_zones(),
            );
            let (vehicles, zones) = (vehicles?, zones?);

            let outcome = self.router.route_leg(leg, &vehicles, &zones, &positions);
            routed.push(outcome.leg);
            positions = outcome.positions;
        }

        info!(
            moved_vehicles = positions.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "planned trip"
        );

        Ok(TripPlan {
            legs: routed,
            updated_vehicle_positions: positions.to_positions(),
        })
    }

    /// Price routed legs under both schedules offered by the provider.
    #[instrument(skip_all, fields(legs = legs.len()))]
    pub fn estimate_price(&self, legs: &[RoutedLeg]) -> Result<TripPriceEstimate, PlannerError> {
        let schedules = self.provider.pricing_schedules()?;
        let estimate = self.pricing.estimate(legs, &schedules);
        info!(
            cheapest = ?estimate.cheapest_option,
            price = estimate.cheapest().estimated_price,
            "estimated trip price"
        );
        Ok(estimate)
    }
}
