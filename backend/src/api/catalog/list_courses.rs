//! Full, unfiltered course list, loaded once per process.

use std::sync::Arc;

use common::course::Course;
use tokio::sync::OnceCell;

use crate::catalog_utils::{catalog_config::catalog_source_from_env, catalog_loader::load_catalog};

static CATALOG: OnceCell<Arc<Vec<Course>>> = OnceCell::const_new();

/// A failed load is not cached; the next call tries again.
pub(crate) async fn shared_catalog() -> anyhow::Result<Arc<Vec<Course>>> {
    let catalog = CATALOG
        .get_or_try_init(|| async {
            let source = catalog_source_from_env();
            load_catalog(&source).await.map(Arc::new)
        })
        .await?;
    Ok(catalog.clone())
}

pub async fn list_courses() -> anyhow::Result<Vec<Course>> {
    let catalog = shared_catalog().await?;
    Ok(catalog.as_ref().clone())
}
