use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use share_copy::{
    classify, prepare_share_with_rng, Category, LengthKind, LengthRange, ShareRequest, Tone,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "share-copy",
    about = "Classify a shared resource and write promotional copy for it",
    version
)]
struct Cli {
    /// Log classification and generation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the detected category and matched keywords as JSON
    Classify {
        /// Resource name
        name: String,
    },
    /// Generate share copy for a resource
    Generate {
        /// Resource name
        name: String,

        /// Share link appended on its own line
        #[arg(long)]
        link: Option<String>,

        /// Category id, or "auto" to use the detected one
        #[arg(long, default_value = "auto")]
        category: String,

        /// plain, marketing, playful, professional, warm or trendy
        #[arg(long, default_value = "plain")]
        tone: Tone,

        /// short, medium or long
        #[arg(long, default_value = "medium")]
        length: LengthKind,

        /// Custom minimum length (overrides --length together with --max)
        #[arg(long, requires = "max")]
        min: Option<usize>,

        /// Custom maximum length
        #[arg(long, requires = "min")]
        max: Option<usize>,

        /// Leave off the trailing hashtags
        #[arg(long)]
        no_hashtags: bool,

        /// Seed for reproducible template and filler choice
        #[arg(long)]
        seed: Option<u64>,

        /// Print the whole draft as JSON instead of the share text
        #[arg(long)]
        json: bool,
    },
    /// List categories, tones and lengths with their labels
    List,
}

fn parse_category_choice(raw: &str) -> Result<Option<Category>> {
    if raw.trim().eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    let category = raw.parse::<Category>()?;
    Ok(Some(category))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Classify { name } => {
            let result = classify(&name);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Generate {
            name,
            link,
            category,
            tone,
            length,
            min,
            max,
            no_hashtags,
            seed,
            json,
        } => {
            let range = match (min, max) {
                (Some(min), Some(max)) => LengthRange::new(min, max)?,
                _ => length.range(),
            };
            let req = ShareRequest {
                name,
                link,
                category: parse_category_choice(&category)?,
                tone,
                length: range,
                include_hashtags: !no_hashtags,
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            let draft =
                prepare_share_with_rng(&req, &mut rng).context("failed to generate share copy")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&draft)?);
            } else {
                println!("{}", draft.share_text);
            }
        }
        Commands::List => {
            let schema = json!({
                "categories": Category::ALL.iter().map(|c| json!({
                    "id": c.as_str(),
                    "label": c.label(),
                    "keywords": c.keywords(),
                })).collect::<Vec<_>>(),
                "tones": Tone::ALL.iter().map(|t| json!({
                    "id": t.as_str(),
                    "label": t.label(),
                })).collect::<Vec<_>>(),
                "lengths": LengthKind::ALL.iter().map(|k| json!({
                    "id": k.as_str(),
                    "label": k.label(),
                    "min": k.range().min,
                    "max": k.range().max,
                })).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}
