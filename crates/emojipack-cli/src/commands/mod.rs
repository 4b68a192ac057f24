//! Subcommands and the source/pack flags they share

pub mod compare;
pub mod generate;

use clap::Args;
use emojipack_core::{GemojiEntry, SnippetPack};
use emojipack_store::source::{
    fetch_gemoji_data, parse_gemoji_json, ReqwestTransport, SourceConfig, DEFAULT_CACHE_DIR,
    GEMOJI_JSON_URL,
};
use std::path::PathBuf;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Where the gemoji data comes from
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Read the gemoji database from a local file instead of downloading it
    #[arg(long, value_name = "PATH")]
    pub source_file: Option<PathBuf>,

    /// Gemoji database URL
    #[arg(long, env = "EMOJIPACK_SOURCE_URL", default_value = GEMOJI_JSON_URL)]
    pub url: String,

    /// Directory for the download cache
    #[arg(long, env = "EMOJIPACK_CACHE_DIR", default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Keyword prefix of the generated pack
    #[arg(long, default_value = ":")]
    pub prefix: String,

    /// Keyword suffix of the generated pack
    #[arg(long, default_value = ":")]
    pub suffix: String,
}

impl SourceArgs {
    fn config(&self) -> SourceConfig {
        SourceConfig {
            url: self.url.clone(),
            cache_dir: self.cache_dir.clone(),
            ..Default::default()
        }
    }

    fn load_entries(&self) -> Result<Vec<GemojiEntry>, Box<dyn std::error::Error>> {
        if let Some(path) = &self.source_file {
            tracing::debug!(path = %path.display(), "Reading gemoji database from file");
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
            return Ok(parse_gemoji_json(&text)?);
        }

        let config = self.config();
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(fetch_gemoji_data(&transport, &config)?)
    }

    /// Generate a pack with this source and these delimiters
    pub fn generate_pack(&self) -> Result<SnippetPack, Box<dyn std::error::Error>> {
        let entries = self.load_entries()?;
        Ok(SnippetPack::from_gemoji(&entries, &self.prefix, &self.suffix))
    }
}
