//! jordbruk codes command

use clap::{Args, Subcommand};
use shared::MeasurementUnit;
use ssb_jordbruk_fagfunksjoner::{CodeQuery, Produksjonstilskudd};

#[derive(Debug, Args)]
pub struct CodesCommand {
    #[command(subcommand)]
    pub command: CodesSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum CodesSubcommand {
    /// List code values, optionally filtered
    List {
        /// Only codes in this category (repeatable)
        #[arg(short, long)]
        category: Vec<String>,
        /// Only codes reported in this unit (antall, dekar or kilo)
        #[arg(short, long)]
        unit: Option<String>,
        /// Only codes valid in this year
        #[arg(short, long)]
        year: Option<u16>,
        /// Prefix code values with pk_
        #[arg(long)]
        prefix: bool,
    },
    /// Show one code in full
    Show {
        /// Code value, e.g. 120
        code: String,
    },
    /// Show the replacement chain of a code
    Chain {
        /// Code value, e.g. 119
        code: String,
    },
}

impl CodesCommand {
    pub fn run(&self, registry: &Produksjonstilskudd, json: bool) -> anyhow::Result<()> {
        match &self.command {
            CodesSubcommand::List {
                category,
                unit,
                year,
                prefix,
            } => {
                let mut query = CodeQuery::new();
                if !category.is_empty() {
                    query = query.with_categories(category.clone());
                }
                if let Some(unit) = unit {
                    let unit: MeasurementUnit = unit.parse()?;
                    query = query.with_measurement(unit);
                }
                if let Some(year) = year {
                    query = query.for_year(*year);
                }
                if *prefix {
                    query = query.with_prefix();
                }

                let codes = registry.try_query(&query)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&codes)?);
                } else {
                    for code in &codes {
                        println!("{}", code);
                    }
                }
            }
            CodesSubcommand::Show { code } => match registry.get(code) {
                Some(kode) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(kode)?);
                    } else {
                        println!("{}", kode);
                    }
                }
                None => anyhow::bail!("Code '{}' is not in the codelist", code),
            },
            CodesSubcommand::Chain { code } => {
                let chain = registry.replacement_chain(code);
                if chain.is_empty() {
                    anyhow::bail!("Code '{}' is not in the codelist", code);
                }
                if json {
                    println!("{}", serde_json::to_string_pretty(&chain)?);
                } else {
                    println!("{}", chain.join(" -> "));
                }
            }
        }
        Ok(())
    }
}
