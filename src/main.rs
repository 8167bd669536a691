use anyhow::Result;
use console::style;
use file_organizer::component::ExtensionSorter;
use file_organizer::config::Config;
use file_organizer::init;
use std::process;

fn run() -> Result<()> {
    let config = Config::from_current_dir()?;
    ExtensionSorter::new(config).run()?;
    Ok(())
}

fn main() {
    init::init();

    if let Err(e) = run() {
        println!("{} {e:#}", style("Error:").red().bold());
        process::exit(1);
    }
}
