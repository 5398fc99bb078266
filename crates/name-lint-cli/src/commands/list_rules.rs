//! List rules command implementation.

use name_lint_rules::{all_checkers, Category};

/// Runs the list-rules command.
pub fn run() {
    println!("Naming rules:\n");
    println!("{:<8} {:<15} {:<22} Pattern", "Code", "Name", "Convention");
    println!("{}", "-".repeat(80));

    for category in Category::ALL {
        println!(
            "{:<8} {:<15} {:<22} {}",
            category.code(),
            category.rule_name(),
            category.convention(),
            category.pattern()
        );
    }

    println!("\nCheckers:");
    for checker in all_checkers() {
        println!("  {} {:<20} {}", checker.code(), checker.name(), checker.description());
    }

    println!("\nOnly top-level types annotated with the marker (default @CheckName) are");
    println!("checked. Use --all to check every type:");
    println!("  name-lint check --all src/main/java");
}
