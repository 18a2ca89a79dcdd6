pub use super::applied_modules::Entity as AppliedModules;
pub use super::applied_modules_entry::Entity as AppliedModulesEntry;
pub use super::module::Entity as Module;
pub use super::module_coordinator::Entity as ModuleCoordinator;
pub use super::recruitment_series::Entity as RecruitmentSeries;
pub use super::ta_application::Entity as TaApplication;
pub use super::user::Entity as User;
