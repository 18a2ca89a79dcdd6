//! Factory functions for in-memory models.
//!
//! These build model instances with standard test values without database interaction,
//! suitable for unit tests of pure conversions.

use chrono::Utc;
use entity::{module::ModuleStatus, recruitment_series::SeriesStatus, user::UserRole};

pub fn mock_user_model(id: i32, role: UserRole) -> entity::user::Model {
    entity::user::Model {
        id,
        email: format!("user{}@example.ac.uk", id),
        name: format!("Test User {}", id),
        role,
        created_at: Utc::now().naive_utc(),
    }
}

pub fn mock_series_model(id: i32) -> entity::recruitment_series::Model {
    let now = Utc::now().naive_utc();
    entity::recruitment_series::Model {
        id,
        name: "Semester 1 2026/27".to_string(),
        application_due_date: now,
        undergrad_hour_limit: 6.0,
        postgrad_hour_limit: 10.0,
        status: SeriesStatus::Active,
        created_at: now,
    }
}

/// Create a mock advertised module with two positions per role and nothing applied
pub fn mock_module_model(id: i32, recruitment_series_id: i32) -> entity::module::Model {
    let now = Utc::now().naive_utc();
    entity::module::Model {
        id,
        recruitment_series_id,
        code: format!("COMP{}", 1000 + id),
        name: format!("Test Module {}", id),
        semester: "1".to_string(),
        module_status: ModuleStatus::Advertised,
        required_ta_hours: 4.0,
        required_undergraduate_ta_count: 2,
        applied_undergraduate_count: 0,
        undergraduate_remaining: 2,
        undergraduate_reviewed: 0,
        undergraduate_accepted: 0,
        undergraduate_doc_submitted: 0,
        undergraduate_appointed: 0,
        required_postgraduate_ta_count: 2,
        applied_postgraduate_count: 0,
        postgraduate_remaining: 2,
        postgraduate_reviewed: 0,
        postgraduate_accepted: 0,
        postgraduate_doc_submitted: 0,
        postgraduate_appointed: 0,
        created_at: now,
        updated_at: now,
    }
}
