use anyhow::{bail, Context, Result};
use blog_client::{BlogClient, Post};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const PREVIEW_LEN: usize = 150;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the blog API
    #[arg(short, long, env = "BLOG_API_URL", default_value = "http://localhost:5000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every post, newest first
    List,

    /// Show a single post
    Get {
        #[arg(short, long)]
        id: String,
    },

    /// Publish a new post
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,

        #[arg(short, long)]
        author: String,
    },

    /// Check that the API is up
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let client = BlogClient::new(cli.server);

    println!("🔌 Connecting to: {}", client.base_url());

    match cli.command {
        Commands::List => {
            let posts = client.list_posts().await.context("Failed to list posts")?;

            if posts.is_empty() {
                println!("   No posts yet");
                println!("   Tip: blog-cli create --title \"My Post\" --content \"Hello\" --author \"Me\"");
            } else {
                println!("✅ Found {} posts", posts.len());
                println!();
                for post in &posts {
                    println!("   [{}] {}", post.id, post.title);
                    println!("      By {} • {}", post.author, format_date(&post.created_at));
                    println!("      {}", preview(&post.content, PREVIEW_LEN));
                    println!();
                }
            }
        }

        Commands::Get { id } => match client.get_post(&id).await {
            Ok(post) => print_post(&post),
            Err(e) if e.is_not_found() => {
                bail!("Post {} not found. Use 'list' to see available posts", id)
            }
            Err(e) => return Err(e).context("Failed to fetch post"),
        },

        Commands::Create {
            title,
            content,
            author,
        } => {
            let (title, content, author) = (title.trim(), content.trim(), author.trim());
            if title.is_empty() || content.is_empty() || author.is_empty() {
                bail!("Please fill in all fields");
            }

            println!("📝 Creating new post...");
            let post = client
                .create_post(title, content, author)
                .await
                .context("Failed to create post")?;

            println!("✅ Post created successfully!");
            print_post(&post);
        }

        Commands::Health => {
            let health = client.health().await.context("Health check failed")?;
            println!(
                "✅ {} is {} ({})",
                health.service,
                health.status,
                health.timestamp.to_rfc3339()
            );
        }
    }

    Ok(())
}

fn print_post(post: &Post) {
    println!("   ID: {}", post.id);
    println!("   Title: {}", post.title);
    println!("   Author: {}", post.author);
    println!("   Created: {}", format_date(&post.created_at));
    println!();
    println!("{}", post.content);
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Cuts `s` to at most `max_chars` characters, appending `...` when shortened.
fn preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_unchanged() {
        assert_eq!(preview("hello", 150), "hello");
        assert_eq!(preview(&"a".repeat(150), 150), "a".repeat(150));
    }

    #[test]
    fn long_content_is_cut_on_char_boundary() {
        assert_eq!(preview(&"a".repeat(151), 150), format!("{}...", "a".repeat(150)));
        assert_eq!(preview("привет мир", 6), "привет...");
    }

    #[test]
    fn dates_render_like_the_web_ui() {
        let date = "2023-01-02T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_date(&date), "January 2, 2023");
    }

    #[test]
    fn cli_parses_create() {
        let cli = Cli::try_parse_from([
            "blog-cli",
            "--server",
            "http://api:5000",
            "create",
            "--title",
            "T",
            "--content",
            "C",
            "--author",
            "A",
        ])
        .unwrap();

        assert_eq!(cli.server, "http://api:5000");
        assert!(matches!(cli.command, Commands::Create { .. }));
    }
}
