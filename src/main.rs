//! beacon-glyphs CLI: browse, resolve, and export the glyph registry.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};

use beacon_glyphs::bind;
use beacon_glyphs::catalog::CATALOG_VERSION;
use beacon_glyphs::category::GlyphCategory;
use beacon_glyphs::config::BeaconConfig;
use beacon_glyphs::id;
use beacon_glyphs::markup::HtmlWriter;
use beacon_glyphs::options::RenderOptions;
use beacon_glyphs::registry::{self, GlyphRegistry, RegistryDocument};
use beacon_glyphs::resolve::Resolver;
use beacon_glyphs::showcase::{self, LegendConfig};
use beacon_glyphs::trail::{Representation, TrailSession};

const REGISTRY_DESCRIPTION: &str = "BeaconGlyphs symbol registry";

#[derive(Parser)]
#[command(name = "beacon-glyphs", version, about = "Glyph registry and resolver")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/beacon-glyphs/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Registry JSON to use instead of the configured or built-in one.
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered glyphs.
    List {
        /// Only glyphs in this category.
        #[arg(long)]
        category: Option<GlyphCategory>,

        /// Only glyphs carrying this tag.
        #[arg(long)]
        tag: Option<String>,
    },

    /// Show one glyph's descriptor (canonical or legacy id).
    Show {
        id: String,

        /// Print the descriptor as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Resolve a glyph with render options and print the result.
    Resolve {
        id: String,

        /// Size token (sm, md, lg) or pixel count.
        #[arg(long)]
        size: Option<String>,

        /// Color token.
        #[arg(long)]
        color: Option<String>,

        /// Variant token (filled, outline).
        #[arg(long)]
        variant: Option<String>,

        /// Animation token (pulse, spin, bounce).
        #[arg(long)]
        animate: Option<String>,

        /// Accessibility label override.
        #[arg(long)]
        label: Option<String>,

        /// Extra class string.
        #[arg(long)]
        class: Option<String>,

        #[arg(long)]
        interactive: bool,

        #[arg(long)]
        disabled: bool,

        /// Print the presentation and attributes as JSON instead of HTML.
        #[arg(long)]
        json: bool,
    },

    /// Render the glyph catalog.
    Showcase {
        #[arg(long, value_enum, default_value_t = ShowcaseFormat::Text)]
        format: ShowcaseFormat,

        /// Write to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Use `[KEYWORD]` text instead of unicode symbols (text format).
        #[arg(long)]
        plain: bool,

        /// Disable ANSI colors (text format).
        #[arg(long)]
        no_color: bool,
    },

    /// Validate a registry document and report errors and warnings.
    Validate {
        /// Registry JSON file (defaults to the active registry).
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Export the active registry as JSON.
    Export,

    /// Print the canonical form of an id.
    Canonical { id: String },

    /// Render a session trail from a JSON file.
    Trail {
        file: PathBuf,

        /// Use `[KEYWORD]` text instead of unicode symbols.
        #[arg(long)]
        plain: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ShowcaseFormat {
    Html,
    Text,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BeaconConfig::discover(cli.config.as_deref())?;

    let external = match &cli.registry {
        Some(path) => Some(GlyphRegistry::load(path)?),
        None => config.load_registry()?,
    };
    let registry = external.as_ref().unwrap_or_else(|| GlyphRegistry::builtin());
    let resolver = Resolver::with_config(registry, &config.resolver_config());

    match cli.command {
        Commands::List { category, tag } => {
            let mut glyphs = match &tag {
                Some(tag) => registry.search_by_tag(tag),
                None => registry.list_all().iter().collect(),
            };
            if let Some(c) = category {
                glyphs.retain(|d| d.category == c);
            }
            for d in &glyphs {
                println!(
                    "  {}  {:<26} {:<20} {}",
                    d.unicode, d.id, d.display_name, d.description
                );
            }
            println!("{} glyphs", glyphs.len());
        }

        Commands::Show { id, json } => {
            let canonical = id::canonicalize(&id);
            let Some(d) = registry.lookup(&canonical) else {
                miette::bail!("unknown glyph \"{id}\" (try `beacon-glyphs list`)");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(d).into_diagnostic()?);
            } else {
                println!("{} {}", d.unicode, d.display_name);
                println!("  id:          {}", d.id);
                println!("  category:    {}", d.category);
                println!("  description: {}", d.description);
                println!("  text:        {}", d.text);
                match d.asset.path() {
                    Some(path) => println!("  asset:       {path}"),
                    None => println!("  asset:       (inline svg)"),
                }
                if !d.metadata.tags.is_empty() {
                    println!("  tags:        {}", d.metadata.tags.join(", "));
                }
                let related: Vec<_> = registry.related(&d.id).iter().map(|r| r.id.as_str()).collect();
                if !related.is_empty() {
                    println!("  related:     {}", related.join(", "));
                }
            }
        }

        Commands::Resolve {
            id,
            size,
            color,
            variant,
            animate,
            label,
            class,
            interactive,
            disabled,
            json,
        } => {
            let mut options = RenderOptions::parse(
                size.as_deref(),
                color.as_deref(),
                variant.as_deref(),
                animate.as_deref(),
            )?
            .interactive(interactive)
            .disabled(disabled);
            if let Some(label) = label {
                options = options.label(label);
            }
            if let Some(class) = class {
                options = options.class_name(class);
            }
            let options = config.apply_defaults(options);

            let presentation = resolver.resolve(&id, &options);
            let bound = bind::bind(&presentation, None);
            if json {
                let out = serde_json::json!({
                    "presentation": presentation,
                    "attributes": bound.attributes,
                });
                println!("{}", serde_json::to_string_pretty(&out).into_diagnostic()?);
            } else {
                println!("{}", HtmlWriter::with_asset_base(&config.asset_base).glyph(&bound));
            }
        }

        Commands::Showcase {
            format,
            out,
            plain,
            no_color,
        } => {
            let rendered = match format {
                ShowcaseFormat::Html => {
                    showcase::render_html(registry, &HtmlWriter::with_asset_base(&config.asset_base))
                }
                ShowcaseFormat::Text => {
                    let legend = LegendConfig {
                        color: out.is_none() && !no_color && LegendConfig::default().color,
                        plain_text: plain,
                    };
                    showcase::render_legend(registry, &legend)
                }
            };
            emit(&rendered, out.as_deref())?;
        }

        Commands::Validate { file } => {
            let doc: RegistryDocument = match &file {
                Some(path) => {
                    let content = std::fs::read_to_string(path).into_diagnostic()?;
                    serde_json::from_str(&content).into_diagnostic()?
                }
                None => registry.to_document(CATALOG_VERSION, REGISTRY_DESCRIPTION),
            };
            let report = registry::validate_document(&doc);

            println!("Validated {} glyphs (version {})", report.glyph_count, doc.version);
            for warning in &report.warnings {
                println!("  warning: {warning}");
            }
            for error in &report.errors {
                println!("  error:   {error}");
            }
            if !report.is_valid() {
                miette::bail!("registry has {} error(s)", report.errors.len());
            }
            println!("Registry is valid.");
        }

        Commands::Export => {
            println!("{}", registry.to_json(CATALOG_VERSION, REGISTRY_DESCRIPTION)?);
        }

        Commands::Canonical { id } => {
            let canonical = id::canonicalize(&id);
            let status = if registry.contains(&canonical) {
                "registered"
            } else {
                "not registered"
            };
            println!("{canonical} ({status})");
        }

        Commands::Trail { file, plain } => {
            let content = std::fs::read_to_string(&file).into_diagnostic()?;
            let session = TrailSession::from_json(&content).into_diagnostic()?;
            let repr = if plain {
                Representation::Text
            } else {
                Representation::Unicode
            };
            println!("{}", session.render_lineage(registry, repr));
            println!();
            println!("Timeline: {}", session.render_timeline(registry, repr));
            println!("{}", session.continuity_summary(registry));
        }
    }

    Ok(())
}

fn emit(content: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, content).into_diagnostic()?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
