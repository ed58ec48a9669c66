use crate::prelude::{println, *};
use colored::Colorize;
use toolspark_core::catalog::{list_tools, ToolCategory};

#[derive(Debug, clap::Args)]
pub struct ListOptions {
    /// Only show one category (utility, daily, ai)
    #[arg(short, long)]
    pub category: Option<ToolCategory>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, ctx: crate::Context) -> Result<()> {
    let entries = list_tools(options.category);

    if options.json {
        return print_json(&entries);
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold(),
        "Category".bold(),
        "Tool".bold(),
        "Description".bold()
    ]);
    for entry in &entries {
        table.add_row(prettytable::row![
            entry.id.cyan(),
            entry.category.label(),
            entry.title.bold(),
            entry.description
        ]);
    }
    table.printstd();

    if ctx.global.verbose {
        let counter = ctx.pipeline.counter();
        println!();
        println!(
            "{} tools, {} uses so far, redirect in {}",
            entries.len(),
            counter.current_count(),
            counter.uses_until_redirect()
        );
    }

    Ok(())
}
