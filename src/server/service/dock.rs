use sea_orm::DatabaseConnection;

use crate::server::{
    data::dock::DockRepository,
    error::AppError,
    model::dock::{CreateDockParams, Dock, DockFilter, DockStats, UpdateDockParams},
};

pub struct DockService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DockService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a dock.
    ///
    /// # Returns
    /// - `Ok(Dock)` - The created dock
    /// - `Err(AppError::Conflict)` - Dock number already in use
    pub async fn create(&self, params: CreateDockParams) -> Result<Dock, AppError> {
        let repo = DockRepository::new(self.db);

        if repo.find_by_dock_number(&params.dock_number).await?.is_some() {
            return Err(duplicate(&params.dock_number));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self, filter: DockFilter) -> Result<Vec<Dock>, AppError> {
        Ok(DockRepository::new(self.db).get_all(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Dock, AppError> {
        DockRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i32, params: UpdateDockParams) -> Result<Dock, AppError> {
        let repo = DockRepository::new(self.db);
        let dock = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if let Some(dock_number) = params.dock_number.as_deref() {
            if let Some(existing) = repo.find_by_dock_number(dock_number).await? {
                if existing.id != id {
                    return Err(duplicate(dock_number));
                }
            }
        }

        Ok(repo.update(dock.merge(params)).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !DockRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    pub async fn stats(&self) -> Result<DockStats, AppError> {
        Ok(DockRepository::new(self.db).stats().await?)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Dock {} not found", id))
}

fn duplicate(dock_number: &str) -> AppError {
    AppError::Conflict(format!("Dock number {} already exists", dock_number))
}
