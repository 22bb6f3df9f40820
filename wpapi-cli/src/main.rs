//! Command-line access to WordPress REST API entities.
//!
//! Usage:
//!   wpapi --root https://example.com/wp-json get post 42
//!   wpapi get term news --post-type post --taxonomy category
//!   wpapi parent page 12
//!   wpapi url comment 7 --post 42
//!
//! Without `--root` the API root is read from `WPAPI_ROOT`.

use anyhow::{Context, Result, bail};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde_json::Value;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;
use wpapi_client::{ApiConfig, Client, Parent};
use wpapi_model::{Entity, EntityKind, Identity, TermScope};

#[derive(Parser, Debug)]
#[command(name = "wpapi")]
#[command(about = "Read WordPress REST API entities")]
struct Args {
    /// API root, e.g. https://example.com/wp-json (defaults to $WPAPI_ROOT)
    #[arg(short, long, global = true)]
    root: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch an entity and print it as JSON
    Get(Target),
    /// Fetch an entity's parent and print it as JSON
    Parent(Target),
    /// Print the URL an entity would be read from
    Url {
        #[command(flatten)]
        scope: Scope,
        kind: EntityKind,
        identity: Option<Identity>,
    },
}

#[derive(ClapArgs, Debug)]
struct Target {
    #[command(flatten)]
    scope: Scope,
    kind: EntityKind,
    identity: Identity,
}

/// Attributes that place an entity under its owner.
#[derive(ClapArgs, Debug)]
struct Scope {
    /// Post type of a term or taxonomy
    #[arg(long)]
    post_type: Option<String>,

    /// Taxonomy of a term
    #[arg(long)]
    taxonomy: Option<String>,

    /// Post a comment belongs to
    #[arg(long)]
    post: Option<i64>,
}

impl Scope {
    /// An entity of `kind` placed according to these options.
    fn entity(&self, kind: EntityKind, identity: Option<Identity>) -> Result<Entity> {
        let mut entity = match kind {
            EntityKind::Term => Entity::term(TermScope::from_parts(
                self.post_type.as_deref(),
                self.taxonomy.as_deref(),
            )),
            EntityKind::Comment => {
                let post = self.post.context("comments need --post")?;
                Entity::new(kind).with("post", post)
            }
            EntityKind::Taxonomy => match &self.post_type {
                Some(post_type) => Entity::new(kind).with("types", vec![post_type.clone()]),
                None => Entity::new(kind),
            },
            _ => Entity::new(kind),
        };
        if let Some(identity) = identity {
            entity.set_identity(identity);
        }
        Ok(entity)
    }
}

fn config(root: Option<String>) -> Result<ApiConfig> {
    let config = match root {
        Some(root) => ApiConfig::new(root),
        None => ApiConfig::from_env().context("no --root given")?,
    };
    config.validate()?;
    Ok(config)
}

fn print(entity: &Entity) -> Result<()> {
    let json = serde_json::to_string_pretty(&Value::Object(entity.to_wire()))?;
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = config(args.root)?;
    debug!("API root {}", config.root);

    match args.command {
        Command::Url {
            scope,
            kind,
            identity,
        } => {
            let entity = scope.entity(kind, identity)?;
            println!("{}", entity.url(&config.root));
        }
        Command::Get(target) => {
            let client = Client::new(config)?;
            let mut entity = target.scope.entity(target.kind, Some(target.identity))?;
            client
                .fetch(&mut entity)
                .await
                .with_context(|| format!("failed to fetch {}", client.url(&entity)))?;
            print(&entity)?;
        }
        Command::Parent(target) => {
            let client = Client::new(config)?;
            let mut entity = target
                .scope
                .entity(target.kind, Some(target.identity.clone()))?;
            client
                .fetch(&mut entity)
                .await
                .with_context(|| format!("failed to fetch {}", client.url(&entity)))?;

            match client.parent::<wpapi_model::EntityCollection>(&entity, None)? {
                Parent::None => bail!("{} {} has no parent", target.kind, target.identity),
                Parent::Resident(found) => {
                    print(&found.context("parent not loaded in collection")?)?;
                }
                Parent::Pending(pending) => {
                    let url = client.url(pending.placeholder());
                    let parent = pending
                        .wait()
                        .await
                        .with_context(|| format!("failed to fetch parent {url}"))?;
                    print(&parent)?;
                }
            }
        }
    }

    Ok(())
}
