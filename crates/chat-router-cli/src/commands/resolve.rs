use std::path::Path;

use anyhow::{Context, Result};
use chat_router::{normalize_path, Navigation, Resolution, RouteTable};
use colored::Colorize;

pub struct Options {
    pub json: bool,
    pub follow: bool,
    pub normalize: bool,
}

pub fn execute(config: Option<&Path>, paths: &[String], options: &Options) -> Result<()> {
    let table = super::load_table(config)?;

    for raw in paths {
        let path = if options.normalize {
            normalize_path(raw)
        } else {
            raw.as_str().into()
        };

        let nav = navigate(&table, &path, options.follow);

        if options.json {
            let line = serde_json::to_string(&nav.outcome)
                .with_context(|| format!("Failed to serialize outcome for {raw}"))?;
            println!("{line}");
        } else {
            print_navigation(raw, &nav);
        }
    }

    Ok(())
}

fn navigate(table: &RouteTable, path: &str, follow: bool) -> Navigation {
    if follow {
        table.trace(path)
    } else {
        Navigation {
            chain: vec![path.to_string()],
            outcome: table.resolve_step(path),
        }
    }
}

fn print_navigation(raw: &str, nav: &Navigation) {
    let outcome = match &nav.outcome {
        Resolution::View { view_id, params } if params.is_empty() => {
            format!("view {}", view_id.as_str().cyan().bold())
        }
        Resolution::View { view_id, params } => {
            let params: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
            format!("view {} {{{}}}", view_id.as_str().cyan().bold(), params.join(", "))
        }
        Resolution::Redirect { target } => format!("redirect -> {}", target.yellow()),
        Resolution::NotFound => "not found".red().to_string(),
        Resolution::Error { .. } => format!(
            "{} after {} hops",
            "redirect loop".red().bold(),
            nav.hops()
        ),
    };

    println!("{} {}", raw.bold(), outcome);

    if nav.hops() > 0 {
        println!("  {}", nav.chain.join(" -> ").dimmed());
    }
}
