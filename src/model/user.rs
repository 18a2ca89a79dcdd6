use chrono::NaiveDateTime;
use entity::user::UserRole;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    #[schema(value_type = String, example = "undergraduate")]
    pub role: UserRole,
    pub created_at: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub email: String,
    pub name: String,
    #[schema(value_type = String, example = "postgraduate")]
    pub role: UserRole,
}
