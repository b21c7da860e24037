//! Error types for the provider boundary and the planner facade.
//!
//! Routing and pricing themselves cannot fail; missing candidates show up
//! as shorter paths, not errors.

use std::fmt;

use crate::model::TripPlan;

#[derive(Debug)]
pub enum ProviderError {
    Http(reqwest::Error),
    Decode(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err)
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(err) => write!(f, "provider request failed: {}", err),
            ProviderError::Decode(msg) => write!(f, "provider returned unusable data: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Http(err) => Some(err),
            ProviderError::Decode(_) => None,
        }
    }
}

#[derive(Debug)]
pub enum PlannerError {
    Provider(ProviderError),
    /// The deadline passed between legs. `partial` holds the legs routed so
    /// far and the vehicle positions they left behind.
    DeadlineExceeded { partial: Box<TripPlan> },
}

impl PlannerError {
    /// The consistent prefix of a trip cut short by the deadline.
    pub fn partial_plan(&self) -> Option<&TripPlan> {
        match self {
            PlannerError::DeadlineExceeded { partial } => Some(&**partial),
            PlannerError::Provider(_) => None,
        }
    }
}

impl From<ProviderError> for PlannerError {
    fn from(err: ProviderError) -> Self {
        PlannerError::Provider(err)
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::Provider(err) => write!(f, "{}", err),
            PlannerError::DeadlineExceeded { partial } => {
                write!(f, "deadline exceeded after {} routed legs", partial.legs.len())
            }
        }
    }
}

impl std::error::Error for PlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlannerError::Provider(err) => Some(err),
            PlannerError::DeadlineExceeded { .. } => None,
        }
    }
}
