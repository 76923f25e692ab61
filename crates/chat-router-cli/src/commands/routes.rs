use std::path::Path;

use anyhow::Result;
use chat_router::Target;
use colored::Colorize;

pub fn execute(config: Option<&Path>) -> Result<()> {
    let table = super::load_table(config)?;

    println!("{}", "Routes (first match wins):".green().bold());
    println!();

    for route in table.routes() {
        let target = match &route.target {
            Target::View(view) => format!("view {}", view.as_str().cyan()),
            Target::Redirect(to) => format!("redirect -> {}", to.yellow()),
        };

        let mut extras = Vec::new();
        if route.props {
            if let Some(param) = route.pattern.param_name() {
                extras.push(format!("props: {param}"));
            }
        }
        if let Some(name) = &route.name {
            extras.push(format!("name: {name}"));
        }

        let extras = if extras.is_empty() {
            String::new()
        } else {
            format!("  ({})", extras.join(", ")).dimmed().to_string()
        };

        println!("  {:<24} {}{}", route.pattern.as_str().bold(), target, extras);
    }

    println!();
    println!("Max redirects: {}", table.max_redirects());

    Ok(())
}
