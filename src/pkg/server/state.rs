use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool, Pool, Postgres, Transaction};

use crate::{
    conf::settings,
    pkg::internal::{extract::skills::SkillMatcher, taxonomy::SkillTaxonomy},
    prelude::Result,
};

pub fn db_pool() -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

#[async_trait]
pub trait GetTxn {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>>;
}

#[async_trait]
impl GetTxn for PgPool {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.begin().await?)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
    pub taxonomy: Arc<SkillTaxonomy>,
    pub matcher: Arc<SkillMatcher>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let taxonomy = SkillTaxonomy::default();
        let matcher = SkillMatcher::new(&taxonomy)?;
        Ok(AppState {
            db_pool: Arc::new(db_pool()?),
            taxonomy: Arc::new(taxonomy),
            matcher: Arc::new(matcher),
        })
    }
}
