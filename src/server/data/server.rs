//! Server queries and repository.
//!
//! `ServerQuery` describes a narrowed set of servers without touching the database.
//! Each step consumes the previous description and returns a new one, so a query can
//! be passed along and extended without aliasing. `ServerRepository::fetch` is the
//! single place where a description is executed.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait, Select,
};

use crate::server::model::server::ServerWithCategory;

/// Largest LIMIT the SQLite driver can bind; larger quantities keep every row anyway.
const MAX_LIMIT: u64 = i64::MAX as u64;

/// Composable, not yet executed query over servers.
///
/// Servers are always ordered by id ascending, which makes `take` deterministic.
#[derive(Debug, Clone)]
pub struct ServerQuery {
    select: Select<entity::server::Entity>,
    /// Whether `select` currently carries a LIMIT.
    limited: bool,
    count_members: bool,
}

impl Default for ServerQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerQuery {
    /// Starts from the full set of servers.
    pub fn new() -> Self {
        Self {
            select: entity::prelude::Server::find().order_by_asc(entity::server::Column::Id),
            limited: false,
            count_members: false,
        }
    }

    /// Keeps servers whose category has exactly this name.
    pub fn in_category(self, name: &str) -> Self {
        let category_ids = entity::prelude::Category::find()
            .select_only()
            .column(entity::category::Column::Id)
            .filter(entity::category::Column::Name.eq(name))
            .into_query();

        Self {
            select: self
                .select
                .filter(entity::server::Column::CategoryId.in_subquery(category_ids)),
            ..self
        }
    }

    /// Keeps servers the user is a member of.
    pub fn with_member(self, user_id: i32) -> Self {
        let member_of = entity::prelude::ServerMember::find()
            .select_only()
            .column(entity::server_member::Column::ServerId)
            .filter(entity::server_member::Column::UserId.eq(user_id))
            .into_query();

        Self {
            select: self
                .select
                .filter(entity::server::Column::Id.in_subquery(member_of)),
            ..self
        }
    }

    /// Annotates every fetched server with its number of members.
    ///
    /// Counts come from the full membership table, not from the rows matched by
    /// `with_member`.
    pub fn with_member_count(self) -> Self {
        Self {
            count_members: true,
            ..self
        }
    }

    /// Keeps the first `quantity` servers of the current set.
    pub fn take(self, quantity: u64) -> Self {
        Self {
            select: self.select.limit(quantity.min(MAX_LIMIT)),
            limited: true,
            ..self
        }
    }

    /// Keeps the server with this id, if it is part of the current set.
    ///
    /// When the set was truncated by `take`, the truncated set becomes a subquery so
    /// the id filter cannot reach servers outside the window.
    pub fn with_id(self, id: i32) -> Self {
        let select = if self.limited {
            let window = self
                .select
                .select_only()
                .column(entity::server::Column::Id)
                .into_query();

            entity::prelude::Server::find()
                .filter(entity::server::Column::Id.in_subquery(window))
                .filter(entity::server::Column::Id.eq(id))
                .order_by_asc(entity::server::Column::Id)
        } else {
            self.select.filter(entity::server::Column::Id.eq(id))
        };

        Self {
            select,
            limited: false,
            ..self
        }
    }
}

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Executes a server query, joining each server with its category.
    ///
    /// # Arguments
    /// - `query` - Query description built with `ServerQuery`
    ///
    /// # Returns
    /// - `Ok(Vec<ServerWithCategory>)` - Matching servers ordered by id
    /// - `Err(DbErr::RecordNotFound)` - A server references a missing category
    /// - `Err(DbErr)` - Database error during query
    pub async fn fetch(&self, query: ServerQuery) -> Result<Vec<ServerWithCategory>, DbErr> {
        let rows = query
            .select
            .find_also_related(entity::prelude::Category)
            .all(self.db)
            .await?;

        let counts = if query.count_members {
            let ids: Vec<i32> = rows.iter().map(|(server, _)| server.id).collect();
            Some(self.count_members(&ids).await?)
        } else {
            None
        };

        let mut results = Vec::with_capacity(rows.len());
        for (server, category) in rows {
            let category = category.ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Category with id {} for server {} not found",
                    server.category_id, server.id
                ))
            })?;

            let num_members = counts
                .as_ref()
                .map(|counts| counts.get(&server.id).copied().unwrap_or(0));

            results.push(ServerWithCategory {
                server,
                category,
                num_members,
            });
        }

        Ok(results)
    }

    /// Counts the members of each server in one grouped query.
    ///
    /// Memberships are unique per (server, user), so each count is the number of
    /// distinct members. Servers without members are absent from the map.
    ///
    /// # Arguments
    /// - `server_ids` - Servers to count members for
    ///
    /// # Returns
    /// - `Ok(HashMap<server_id, count>)` - Member count per server that has members
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_members(&self, server_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if server_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::ServerMember::find()
            .select_only()
            .column(entity::server_member::Column::ServerId)
            .column_as(entity::server_member::Column::Id.count(), "count")
            .filter(entity::server_member::Column::ServerId.is_in(server_ids.iter().copied()))
            .group_by(entity::server_member::Column::ServerId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(server_id, count)| (server_id, count.max(0) as u64))
            .collect())
    }
}
