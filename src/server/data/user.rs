use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::user::CreateUserDto;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// A duplicate email surfaces as a unique constraint violation.
    pub async fn create(&self, user: &CreateUserDto) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(user.email.clone()),
            name: ActiveValue::Set(user.name.clone()),
            role: ActiveValue::Set(user.role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use entity::user::UserRole;
        use sea_orm::SqlErr;
        use tarecruit_test_utils::prelude::*;

        use crate::{model::user::CreateUserDto, server::data::user::UserRepository};

        fn dto(email: &str) -> CreateUserDto {
            CreateUserDto {
                email: email.to_string(),
                name: "Grace Hopper".to_string(),
                role: UserRole::Postgraduate,
            }
        }

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_workflow_tables().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.create(&dto("grace@example.ac.uk")).await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert_eq!(user.role, UserRole::Postgraduate);

            Ok(())
        }

        /// Expect unique constraint violation when email is already registered
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_workflow_tables().build().await?;

            let user_repo = UserRepository::new(&test.db);
            user_repo.create(&dto("grace@example.ac.uk")).await?;
            let result = user_repo.create(&dto("grace@example.ac.uk")).await;

            assert!(matches!(
                result.unwrap_err().sql_err(),
                Some(SqlErr::UniqueConstraintViolation(_))
            ));

            Ok(())
        }
    }

    mod get {
        use entity::user::UserRole;
        use tarecruit_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Ok(Some(_)) when existing user is found
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_workflow_tables().build().await?;
            let user_model = test.workflow().insert_user(UserRole::Lecturer).await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get(user_model.id).await;

            assert!(matches!(result, Ok(Some(ref user)) if user.id == user_model.id));

            Ok(())
        }

        /// Expect Ok(None) when user is not found
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_workflow_tables().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get(1).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
