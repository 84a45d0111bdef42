use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLoadError;
use crate::FileIdentity;
use crate::FileResolver;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::Mutex;

type Result<T> = std::result::Result<T, SchemaLoadError>;

#[derive(Debug)]
struct CachedSchema {
    mod_time: SystemTime,
    schema: Arc<Schema>,
}

/// Schemas built during one build or watch session, keyed by schema file.
///
/// A cached schema is reused for as long as its file's modification time is
/// unchanged. The whole stat/compare/rebuild sequence runs under one lock, so
/// concurrent units asking for the same schema build it at most once.
#[derive(Debug, Default)]
pub struct SchemaCache {
    entries: Mutex<HashMap<FileIdentity, CachedSchema>>,
}
impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(
        &self,
        resolver: &dyn FileResolver,
        file: &FileIdentity,
    ) -> Result<Arc<Schema>> {
        let mut entries = self.entries.lock().await;
        let mod_time = resolver.stat_mod_time(file).await?;

        if let Some(cached) = entries.get(file)
            && cached.mod_time == mod_time {
            log::debug!("Schema cache hit for {file}.");
            return Ok(cached.schema.clone());
        }

        log::debug!("Schema cache miss for {file}; building schema...");
        let content = resolver.read_text(file).await?;
        let schema = Arc::new(SchemaBuilder::from_file_content(file.path(), &content)?);
        entries.insert(file.clone(), CachedSchema {
            mod_time,
            schema: schema.clone(),
        });

        Ok(schema)
    }

    /// Number of schemas currently cached.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
