use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

use mediaplayer_render::{logging, MediaResolver};
use mediaplayer_schema::{MediaObject, RenderOptions};

/// Render a JSON-LD media object as embeddable markup
///
/// Reads a media description such as
/// `{"@type": "VideoObject", "contentURL": "http://example.com/a.mp4"}`
/// and prints the HTML fragment chosen by the requested strategy.
#[derive(Parser, Debug)]
#[command(name = "mediaplayer")]
#[command(about = "Render a JSON-LD media object as embeddable markup")]
#[command(version)]
pub struct Args {
    /// JSON file holding the media object; `-` or nothing reads stdin
    pub input: Option<PathBuf>,

    /// Strategy to try before the default one (def, html5, audio)
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Player width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Player height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Placeholder image shown before playback
    #[arg(long)]
    pub poster: Option<String>,

    /// Render options as a JSON object; the flags above take precedence
    #[arg(long)]
    pub options: Option<String>,

    /// Log filter: a level (error, warn, info, debug, trace) or a directive
    /// such as `mediaplayer_render::resolver=trace`. Without it,
    /// `MEDIAPLAYER_LOG_MODE` selects silent, development or debug output.
    #[arg(long)]
    pub log_level: Option<String>,

    /// List registered strategies and exit
    #[arg(long)]
    pub list_strategies: bool,
}

impl Args {
    /// Fill unset flags from `MEDIAPLAYER_*` environment variables
    pub fn apply_env(&mut self) {
        if self.strategy.is_none() {
            self.strategy = std::env::var("MEDIAPLAYER_STRATEGY").ok();
        }

        if self.log_level.is_none() {
            self.log_level = std::env::var("MEDIAPLAYER_LOG_LEVEL").ok();
        }
    }

    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        if self.width == Some(0) || self.height == Some(0) {
            return Err(anyhow::anyhow!("Width and height must be greater than 0"));
        }

        if let Some(filter) = &self.log_level {
            logging::validate_filter(filter)
                .with_context(|| format!("Invalid log level '{}'", filter))?;
        }

        Ok(())
    }

    /// Merge `--options` with the individual flags
    pub fn render_options(&self) -> Result<RenderOptions> {
        let mut options = match &self.options {
            Some(json) => RenderOptions::from_json(json).context("Invalid --options JSON")?,
            None => RenderOptions::new(),
        };

        options.extend(RenderOptions {
            strategy: self.strategy.clone(),
            sources: None,
            poster: self.poster.clone(),
            width: self.width,
            height: self.height,
            url: None,
        });

        Ok(options)
    }

    fn reads_stdin(&self) -> bool {
        match &self.input {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }
}

fn read_input(args: &Args) -> Result<String> {
    let mut json = String::new();

    if args.reads_stdin() {
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read media object from stdin")?;
    } else if let Some(path) = &args.input {
        json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read media object from {}", path.display()))?;
    }

    Ok(json)
}

fn run(args: Args) -> Result<()> {
    let resolver = MediaResolver::standard().context("Failed to set up strategy registry")?;

    if args.list_strategies {
        let registry = resolver.registry();
        for name in registry.names() {
            if name == registry.default_key() {
                println!("{} (default)", name);
            } else {
                println!("{}", name);
            }
        }
        return Ok(());
    }

    let options = args.render_options()?;
    let json = read_input(&args)?;
    let media = MediaObject::from_json(&json).context("Invalid media object")?;
    debug!(kind = %media.kind(), strategy = ?options.strategy, "rendering media object");

    let builder = resolver.resolve(&media, Some(options));
    info!(builder = builder.name(), "resolved builder");

    let mut outcome = Ok(());
    builder.to_html_with(|err, html| {
        outcome = match err {
            None => {
                println!("{}", html);
                Ok(())
            }
            Some(err) => Err(anyhow::Error::new(err)),
        };
    });

    outcome
}

fn main() -> Result<()> {
    let mut args = Args::parse();
    args.apply_env();
    args.validate()?;

    match args.log_level.as_deref() {
        Some(filter) => logging::init_with_filter(filter),
        None => logging::init_logging_from_env(),
    }
    .context("Failed to initialize logging")?;

    run(args)
}
