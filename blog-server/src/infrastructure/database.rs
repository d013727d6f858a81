use crate::infrastructure::config::AppConfig;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Row};

const CREATE_POSTS_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS posts (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        content TEXT NOT NULL,
        author VARCHAR(100) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const SAMPLE_POSTS: [(&str, &str, &str); 3] = [
    (
        "Welcome to Our Blog",
        "This is the first post on our blog platform. We are excited to share our thoughts and ideas with you!",
        "Admin",
    ),
    (
        "Docker Compose Tutorial",
        "Learn how to orchestrate multiple services using Docker Compose. This tutorial covers networking, volumes, and service dependencies.",
        "Tech Writer",
    ),
    (
        "Building Microservices",
        "Microservices architecture allows teams to develop and deploy services independently. Here are some best practices to follow.",
        "DevOps Engineer",
    ),
];

/// Builds the pool lazily: no connection is opened until the first query,
/// so the server can start while the database is still coming up.
pub fn create_pool(config: &AppConfig) -> PgPool {
    let options = PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .database(&config.db_name)
        .username(&config.db_user)
        .password(&config.db_password);

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options);

    tracing::info!(
        "Database connection pool created for {}:{}/{}",
        config.db_host,
        config.db_port,
        config.db_name
    );
    pool
}

pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_POSTS_TABLE_SQL).execute(pool).await?;

    tracing::info!("Posts table is ready");
    Ok(())
}

/// Inserts the sample posts when the table is empty. Returns how many rows
/// were added.
pub async fn seed_sample_posts(pool: &PgPool) -> Result<usize> {
    let count: i64 = sqlx::query("SELECT COUNT(*) AS count FROM posts")
        .fetch_one(pool)
        .await?
        .try_get("count")?;

    if count > 0 {
        tracing::debug!("Skipping sample posts, table already has {} rows", count);
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for (title, content, author) in SAMPLE_POSTS {
        sqlx::query("INSERT INTO posts (title, content, author) VALUES ($1, $2, $3)")
            .bind(title)
            .bind(content)
            .bind(author)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    tracing::info!("Inserted {} sample posts", SAMPLE_POSTS.len());
    Ok(SAMPLE_POSTS.len())
}

/// Schema creation and seeding. Failures are logged and swallowed so the
/// HTTP server still comes up.
pub async fn initialize_database(pool: &PgPool, config: &AppConfig) {
    let result = async {
        ensure_schema(pool).await?;
        if config.seed_sample_posts {
            seed_sample_posts(pool).await?;
        }
        anyhow::Ok(())
    }
    .await;

    match result {
        Ok(()) => tracing::info!("Database initialized successfully"),
        Err(e) => tracing::error!("Error initializing database: {:#}", e),
    }
}
