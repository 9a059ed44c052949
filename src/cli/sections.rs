use clap::Args;
use serde::Serialize;

use crate::models::taxonomy::{self, Section};
use crate::utils::error::Result;

/// Print the folder taxonomy
#[derive(Debug, Default, Args)]
pub struct SectionsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct SectionListing {
    pub name: &'static str,
    pub subfolders: Vec<SubfolderListing>,
}

#[derive(Debug, Serialize)]
pub struct SubfolderListing {
    pub name: &'static str,
    pub extra_children: &'static [&'static str],
}

impl From<&Section> for SectionListing {
    fn from(section: &Section) -> Self {
        Self {
            name: section.name,
            subfolders: section
                .subfolders
                .iter()
                .map(|sub| SubfolderListing {
                    name: *sub,
                    extra_children: taxonomy::extra_children(section.name, sub),
                })
                .collect(),
        }
    }
}

impl SectionsCommand {
    pub fn run(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    pub fn render(&self) -> Result<String> {
        let listings: Vec<SectionListing> =
            taxonomy::sections().iter().map(SectionListing::from).collect();
        if self.json {
            return Ok(serde_json::to_string_pretty(&listings)?);
        }

        let mut out = String::new();
        for listing in &listings {
            out.push_str(listing.name);
            out.push('\n');
            for sub in &listing.subfolders {
                out.push_str(&format!("  - {}\n", sub.name));
                for child in sub.extra_children {
                    out.push_str(&format!("      + {child}\n"));
                }
            }
        }
        Ok(out.trim_end().to_string())
    }
}
