//! jordbruk export command

use clap::Args;
use ssb_jordbruk_fagfunksjoner::Produksjonstilskudd;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Output format: json or yaml
    #[arg(short, long, default_value = "json")]
    pub format: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Version label stamped into the manifest
    #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
    pub manifest_version: String,
}

impl ExportCommand {
    pub fn run(&self, registry: &Produksjonstilskudd) -> anyhow::Result<()> {
        let manifest = registry.to_manifest(&self.manifest_version);

        let content = match self.format.as_str() {
            "json" => serde_json::to_string_pretty(&manifest)?,
            "yaml" | "yml" => serde_yaml::to_string(&manifest)?,
            other => anyhow::bail!("Unsupported format '{}'. Use json or yaml", other),
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, content)?;
                println!(
                    "✓ Exported {} codes to {}",
                    manifest.codes.len(),
                    path.display()
                );
            }
            None => println!("{}", content),
        }
        Ok(())
    }
}
