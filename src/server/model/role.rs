//! Applicant roles and the module counter columns belonging to each.

use entity::{module, user::UserRole};

use crate::server::{error::Error, model::db::RecruitmentSeriesModel};

/// The roles allowed to apply for TA positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicantRole {
    Undergraduate,
    Postgraduate,
}

/// Module columns making up one role's counter group
pub struct CounterColumns {
    pub required: module::Column,
    pub applied: module::Column,
    pub remaining: module::Column,
    pub reviewed: module::Column,
    pub accepted: module::Column,
}

impl ApplicantRole {
    pub fn counters(self) -> CounterColumns {
        match self {
            Self::Undergraduate => CounterColumns {
                required: module::Column::RequiredUndergraduateTaCount,
                applied: module::Column::AppliedUndergraduateCount,
                remaining: module::Column::UndergraduateRemaining,
                reviewed: module::Column::UndergraduateReviewed,
                accepted: module::Column::UndergraduateAccepted,
            },
            Self::Postgraduate => CounterColumns {
                required: module::Column::RequiredPostgraduateTaCount,
                applied: module::Column::AppliedPostgraduateCount,
                remaining: module::Column::PostgraduateRemaining,
                reviewed: module::Column::PostgraduateReviewed,
                accepted: module::Column::PostgraduateAccepted,
            },
        }
    }

    /// Weekly hour budget an applicant of this role starts the series with
    pub fn hour_limit(self, series: &RecruitmentSeriesModel) -> f64 {
        match self {
            Self::Undergraduate => series.undergrad_hour_limit,
            Self::Postgraduate => series.postgrad_hour_limit,
        }
    }
}

impl TryFrom<UserRole> for ApplicantRole {
    type Error = Error;

    fn try_from(role: UserRole) -> Result<Self, Self::Error> {
        match role {
            UserRole::Undergraduate => Ok(Self::Undergraduate),
            UserRole::Postgraduate => Ok(Self::Postgraduate),
            UserRole::Lecturer | UserRole::Admin => Err(Error::ValidationError(
                "Only undergraduate and postgraduate students can apply for TA positions"
                    .to_string(),
            )),
        }
    }
}

impl From<ApplicantRole> for UserRole {
    fn from(role: ApplicantRole) -> Self {
        match role {
            ApplicantRole::Undergraduate => UserRole::Undergraduate,
            ApplicantRole::Postgraduate => UserRole::Postgraduate,
        }
    }
}
