//! jordbruk categories command

use clap::Args;
use ssb_jordbruk_fagfunksjoner::Produksjonstilskudd;

#[derive(Debug, Args)]
pub struct CategoriesCommand {}

impl CategoriesCommand {
    pub fn run(&self, registry: &Produksjonstilskudd, json: bool) -> anyhow::Result<()> {
        if json {
            let entries: Vec<serde_json::Value> = registry
                .categories()
                .iter()
                .map(|category| {
                    serde_json::json!({
                        "category": category,
                        "codeCount": registry.get_codes_in(&[category.as_str()]).len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            println!("Categories ({}):", registry.categories().len());
            for category in registry.categories() {
                let count = registry.get_codes_in(&[category.as_str()]).len();
                println!("  {} ({} codes)", category, count);
            }
        }
        Ok(())
    }
}
