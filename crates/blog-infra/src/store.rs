//! Repository wiring - picks PostgreSQL or in-memory storage.

use std::sync::Arc;

use blog_core::ports::{AuthorRepository, PostRepository};
use blog_core::service::{AuthorService, PostService};

use crate::database::DatabaseConfig;
use crate::memory::{InMemoryAuthorRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use crate::database::{DatabaseConnections, PostgresAuthorRepository, PostgresPostRepository};

/// The storage collaborator handed to the record services.
#[derive(Clone)]
pub struct Repositories {
    pub authors: Arc<dyn AuthorRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl Repositories {
    /// Fresh in-memory storage.
    pub fn in_memory() -> Self {
        Self {
            authors: Arc::new(InMemoryAuthorRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
        }
    }

    /// Connect to PostgreSQL when configured, otherwise (or when the
    /// connection fails) fall back to in-memory storage.
    pub async fn init(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let repos = match db_config {
            Some(config) => match DatabaseConnections::init(config).await {
                Ok(connections) => {
                    tracing::info!("Using PostgreSQL repositories");
                    Self {
                        authors: Arc::new(PostgresAuthorRepository::new(connections.main.clone())),
                        posts: Arc::new(PostgresPostRepository::new(connections.main)),
                    }
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let repos = {
            if db_config.is_some() {
                tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
            }
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory()
        };

        repos
    }

    pub fn author_service(&self) -> AuthorService {
        AuthorService::new(self.authors.clone())
    }

    pub fn post_service(&self) -> PostService {
        PostService::new(self.posts.clone())
    }
}
