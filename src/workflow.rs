use crate::config::SyncConfig;
use crate::error::Result;
use crate::sync::{FileOutcome, FileSync};
use crate::version::Version;
use colored::Colorize;

/// Execute the sync workflow: rewrite outdated directives in place.
pub fn execute_sync(config: &SyncConfig) -> Result<()> {
    println!(
        "{}",
        format!(
            "Enforcing cmake_minimum_required >= {}...",
            config.target_version
        )
        .cyan()
        .bold()
    );

    let sync = FileSync::new(&config.target_version)?;
    let mut total = 0;

    for path in config.target_paths() {
        let outcome = sync.sync_file(&path)?;
        print_outcome(&config.display_path(&path), &outcome, config, false);
        total += outcome.updated_count();
    }

    print_sync_summary(total);
    Ok(())
}

/// Execute the check workflow (dry run): report what sync would change.
pub fn execute_check(config: &SyncConfig) -> Result<()> {
    println!(
        "{}",
        format!(
            "Checking cmake_minimum_required against {} (dry run)...",
            config.target_version
        )
        .cyan()
        .bold()
    );

    let sync = FileSync::new(&config.target_version)?;
    let mut total = 0;

    for path in config.target_paths() {
        let outcome = sync.check_file(&path)?;
        print_outcome(&config.display_path(&path), &outcome, config, true);
        total += outcome.updated_count();
    }

    print_check_summary(total);
    Ok(())
}

/// Execute the list workflow: show every directive found per file.
pub fn execute_list(config: &SyncConfig) -> Result<()> {
    println!(
        "{}",
        "Listing cmake_minimum_required directives...".cyan().bold()
    );

    let sync = FileSync::new(&config.target_version)?;
    let target = Version::parse(&config.target_version)?;

    for path in config.target_paths() {
        let outcome = sync.check_file(&path)?;
        println!("\n{}", config.display_path(&path).bright_cyan());

        match outcome {
            FileOutcome::Missing => println!("  {}", "file not found".yellow()),
            FileOutcome::NoDirective => {
                println!(
                    "  {}",
                    "no cmake_minimum_required directive found".dimmed()
                );
            }
            FileOutcome::Compliant { versions } | FileOutcome::Updated { versions, .. } => {
                for version in &versions {
                    if Version::parse(version)? < target {
                        println!(
                            "  VERSION {} {}",
                            version.red(),
                            format!("(below {})", target).dimmed()
                        );
                    } else {
                        println!("  VERSION {} {}", version.green(), "(ok)".dimmed());
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_outcome(name: &str, outcome: &FileOutcome, config: &SyncConfig, dry_run: bool) {
    match outcome {
        FileOutcome::Missing => {
            println!("  • {}: {}", name.bright_cyan(), "file not found".yellow());
        }
        FileOutcome::NoDirective => {
            println!(
                "  • {}: {}",
                name.bright_cyan(),
                "no cmake_minimum_required directive found".dimmed()
            );
        }
        FileOutcome::Compliant { versions } => {
            println!(
                "  • {}: {} {}",
                name.bright_cyan(),
                format!("already >= {}", config.target_version).green(),
                format!("(found versions: {})", versions.join(", ")).dimmed()
            );
        }
        FileOutcome::Updated { count, versions } => {
            let action = if dry_run { "would update" } else { "updated" };
            println!(
                "  • {}: {} {}",
                name.bright_cyan(),
                format!("{action} {count} occurrence(s)").green().bold(),
                format!("(found versions: {})", versions.join(", ")).dimmed()
            );
        }
    }
}

fn print_sync_summary(total: usize) {
    if total == 0 {
        println!(
            "\n{}",
            "No cmake_minimum_required directives updated.".yellow()
        );
    } else {
        println!(
            "\n{}",
            format!("Updated cmake_minimum_required in {total} location(s).")
                .green()
                .bold()
        );
    }
}

fn print_check_summary(total: usize) {
    if total == 0 {
        println!(
            "\n{}",
            "✨ All target files meet the minimum version!".green().bold()
        );
    } else {
        println!(
            "\n{}",
            format!("{total} occurrence(s) below the minimum version.").yellow()
        );
        println!("\n{}", "To apply these updates, run:".dimmed());
        println!("  {}", "cmver sync".cyan());
    }
}
