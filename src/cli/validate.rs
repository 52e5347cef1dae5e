//! Snapshot validation command implementation.

use super::output::{format_sides, render_board};
use super::{CliError, SnapshotArgs};
use cellmind::game::{check_invariants, Side};

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or violates any board
/// invariant.
pub(crate) fn execute(source: &SnapshotArgs) -> Result<(), CliError> {
    let loaded = source.load()?;
    let board = &loaded.board;

    println!("Validating: {}", source.snapshot.display());
    println!();
    print!("{}", render_board(board));
    println!();
    print!("{}", format_sides(board));
    println!();

    let roots = board.roots(Side::Me).count();
    print_check("own root present", roots > 0);
    if let Some(expected) = loaded.input.required_actions {
        print_check("one command per own root", expected == roots);
    }

    let violations = check_invariants(board);
    print_check("board invariants", violations.is_empty());
    for violation in &violations {
        println!("    - {}", violation.message);
    }
    if !violations.is_empty() {
        return Err(CliError::new(format!(
            "{} invariant violation(s)",
            violations.len()
        )));
    }

    println!();
    println!("Validation successful!");

    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
