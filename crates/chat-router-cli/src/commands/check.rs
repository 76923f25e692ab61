use std::path::Path;

use anyhow::Result;
use colored::Colorize;

pub fn execute(config: Option<&Path>) -> Result<()> {
    let table = super::load_table(config)?;

    let redirects = table.routes().iter().filter(|r| r.is_redirect()).count();

    println!("{}", "✓ Route table is valid".green().bold());
    println!(
        "  {} routes ({} views, {} redirects)",
        table.len(),
        table.len() - redirects,
        redirects
    );

    Ok(())
}
