//! List rules command implementation.

use fp_lint_rules::registry;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<20} {:<9} Description", "Code", "Id", "Default");
    println!("{}", "-".repeat(80));

    for rule in registry() {
        println!(
            "{:<8} {:<20} {:<9} {}",
            rule.code(),
            rule.id(),
            rule.default_severity(),
            rule.description()
        );
    }

    println!("\nUse --rule to run a subset, by id or code, e.g.:");
    println!("  fp-lint lint --rule MutableBinding --rule NativeLoop");
    println!("  fp-lint lint --rule FP001,FP002");
}
