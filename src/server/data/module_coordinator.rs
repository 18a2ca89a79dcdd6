use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

pub struct ModuleCoordinatorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ModuleCoordinatorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links each of `user_ids` to the module as a coordinator
    pub async fn create_many(&self, module_id: i32, user_ids: &[i32]) -> Result<(), DbErr> {
        if user_ids.is_empty() {
            return Ok(());
        }

        let coordinators = user_ids
            .iter()
            .map(|user_id| entity::module_coordinator::ActiveModel {
                module_id: ActiveValue::Set(module_id),
                user_id: ActiveValue::Set(*user_id),
                ..Default::default()
            });

        entity::prelude::ModuleCoordinator::insert_many(coordinators)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn is_coordinator(&self, module_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ModuleCoordinator::find()
            .filter(entity::module_coordinator::Column::ModuleId.eq(module_id))
            .filter(entity::module_coordinator::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns `(module_id, coordinator)` pairs for every module in `module_ids`
    pub async fn get_coordinators_by_module_ids(
        &self,
        module_ids: &[i32],
    ) -> Result<Vec<(i32, entity::user::Model)>, DbErr> {
        if module_ids.is_empty() {
            return Ok(Vec::new());
        }

        let coordinators = entity::prelude::ModuleCoordinator::find()
            .filter(entity::module_coordinator::Column::ModuleId.is_in(module_ids.iter().copied()))
            .order_by_asc(entity::module_coordinator::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(coordinators
            .into_iter()
            .filter_map(|(link, user)| user.map(|user| (link.module_id, user)))
            .collect())
    }
}
