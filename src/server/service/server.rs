use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::{ServerQuery, ServerRepository},
    error::{validation::ValidationError, AppError},
    model::server::{Server, ServerListParams},
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers matching the parameters.
    ///
    /// Filters are composed in a fixed order: category, membership, member count,
    /// quantity, then server id. The id filter therefore only sees servers that
    /// survived the quantity cut.
    ///
    /// # Arguments
    /// - `params` - Validated list parameters
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Matching servers ordered by id, possibly empty
    /// - `Err(AppError::ValidationErr(ServerNotFound))` - `server_id` was given and
    ///   no server in the working set has it
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(&self, params: ServerListParams) -> Result<Vec<Server>, AppError> {
        tracing::debug!(?params, "Listing servers");

        let repo = ServerRepository::new(self.db);

        let mut query = ServerQuery::new();

        if let Some(category) = &params.category {
            query = query.in_category(category);
        }

        if let Some(member_id) = params.member_id {
            query = query.with_member(member_id);
        }

        if params.with_num_members {
            query = query.with_member_count();
        }

        if let Some(quantity) = params.quantity {
            query = query.take(quantity);
        }

        if let Some(server_id) = &params.server_id {
            query = query.with_id(server_id.id);
        }

        let rows = repo.fetch(query).await?;

        if let Some(server_id) = params.server_id {
            if rows.is_empty() {
                return Err(ValidationError::ServerNotFound(server_id.raw).into());
            }
        }

        Ok(rows.into_iter().map(Server::from_with_category).collect())
    }
}
