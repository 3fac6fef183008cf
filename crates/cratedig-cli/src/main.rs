use clap::{Parser, Subcommand};

use cratedig_core::{
    is_release_url, parse_release_url, AppConfig, Condition, ProductCreateRequest, ProductDraft,
    ProductStatus,
};
use cratedig_discogs::DiscogsClient;
use cratedig_shopify::ShopifyClient;

#[derive(Debug, Parser)]
#[command(name = "cratedig-cli")]
#[command(about = "Discogs-to-Shopify import command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a release and print the mapped product draft.
    Lookup {
        /// Discogs release URL, e.g. https://www.discogs.com/release/27681219-...
        url: String,
    },
    /// Fetch a release, map it, and create the Shopify product.
    Import {
        /// Discogs release URL.
        url: String,
        /// Sleeve condition code (M, NM, VG, G, F, P).
        #[arg(long)]
        sleeve: Option<String>,
        /// Media condition code (M, NM, VG, G, F, P).
        #[arg(long)]
        media: Option<String>,
        /// Product status: draft or active.
        #[arg(long, default_value = "draft")]
        status: String,
        /// Select every release image instead of just the first.
        #[arg(long)]
        all_images: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = cratedig_core::load_app_config()?;

    match cli.command {
        Commands::Lookup { url } => lookup(&config, &url).await,
        Commands::Import {
            url,
            sleeve,
            media,
            status,
            all_images,
        } => import(&config, &url, sleeve.as_deref(), media.as_deref(), &status, all_images).await,
    }
}

fn discogs_client(config: &AppConfig) -> Result<DiscogsClient, cratedig_discogs::DiscogsError> {
    DiscogsClient::new(
        &config.discogs_api_key,
        &config.discogs_api_secret,
        &config.user_agent,
        config.http_timeout_secs,
    )
}

async fn fetch_draft(config: &AppConfig, url: &str) -> anyhow::Result<(cratedig_core::Release, ProductDraft)> {
    anyhow::ensure!(
        is_release_url(url),
        "not a Discogs release URL: {url}"
    );
    let release_ref = parse_release_url(url)
        .ok_or_else(|| anyhow::anyhow!("no release id found in URL: {url}"))?;

    let client = discogs_client(config)?;
    let release = client.get_release(&release_ref.id, &config.currency).await?;
    let draft = ProductDraft::from_release(&release, url);
    Ok((release, draft))
}

async fn lookup(config: &AppConfig, url: &str) -> anyhow::Result<()> {
    let (release, draft) = fetch_draft(config, url).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "release": release,
            "draft": draft,
        }))?
    );
    Ok(())
}

fn parse_condition_arg(flag: &str, value: Option<&str>) -> anyhow::Result<Option<Condition>> {
    match value {
        None => Ok(None),
        Some(code) => Condition::parse(code)
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("--{flag} must be one of M, NM, VG, G, F, P; got '{code}'")),
    }
}

async fn import(
    config: &AppConfig,
    url: &str,
    sleeve: Option<&str>,
    media: Option<&str>,
    status: &str,
    all_images: bool,
) -> anyhow::Result<()> {
    let (release, mut draft) = fetch_draft(config, url).await?;

    draft.sleeve_condition = parse_condition_arg("sleeve", sleeve)?;
    draft.media_condition = parse_condition_arg("media", media)?;
    draft.status = ProductStatus::parse(status)
        .ok_or_else(|| anyhow::anyhow!("--status must be 'draft' or 'active', got '{status}'"))?;
    if all_images {
        draft.image_uris = release
            .images
            .iter()
            .map(|image| image.uri.clone())
            .filter(|uri| !uri.is_empty())
            .collect();
    }

    let request = ProductCreateRequest::from_draft(&draft);
    let shopify = ShopifyClient::new(
        &config.shopify_shop_domain,
        &config.shopify_admin_token,
        &config.shopify_api_version,
        config.http_timeout_secs,
    )?;
    let product = shopify.create_product(&request).await?;

    println!("created product {} ({})", product.id, product.title);
    for node in &product.media.nodes {
        let preview = node
            .preview
            .as_ref()
            .and_then(|p| p.status.as_deref())
            .unwrap_or("unknown");
        println!("  media: {} preview={preview}", node.media_content_type);
    }
    Ok(())
}
