//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the server, so signatures don't
//! need to spell out the `entity` crate paths.

/// A department member: applicant, lecturer or administrator.
pub type UserModel = entity::user::Model;

/// A TA hiring round with per-role weekly hour limits.
pub type RecruitmentSeriesModel = entity::recruitment_series::Model;

/// A module needing TA support, carrying capacity fields and live per-role counters.
pub type ModuleModel = entity::module::Model;

/// A `(module, lecturer)` coordination link.
pub type ModuleCoordinatorModel = entity::module_coordinator::Model;

/// Per-user, per-series ledger of remaining weekly hours.
pub type AppliedModulesModel = entity::applied_modules::Model;

/// One application listed under a ledger.
pub type AppliedModulesEntryModel = entity::applied_modules_entry::Model;

/// A single user's application for a TA position on one module.
pub type TaApplicationModel = entity::ta_application::Model;
