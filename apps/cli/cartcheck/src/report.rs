//! Human-readable rendering of a verification outcome.

use cart_core::VerifyOutcome;
use cart_core::compare::Comparison;

use models::Identifier;

use std::io::{self, Write};

fn write_list(out: &mut impl Write, title: &str, ids: &[Identifier]) -> io::Result<()> {
    writeln!(out, "{title} ({}):", ids.len())?;
    for id in ids {
        writeln!(out, "  {id}")?;
    }
    Ok(())
}

/// Write the lists gathered during the run followed by the verdict.
pub fn render(outcome: &VerifyOutcome, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Query: {}", outcome.query)?;
    writeln!(out, "Cart: {}", outcome.cart_id)?;
    write_list(out, "Search results", &outcome.search_results)?;
    write_list(out, "Cart elements", &outcome.cart_elements)?;
    write_list(out, "Cart search results", &outcome.cart_search_results)?;

    match &outcome.comparison {
        Comparison::SizeMismatch { left, right } => {
            writeln!(
                out,
                "INCONSISTENT: search returned {left} identifiers, cart search returned {right}"
            )?;
        }
        Comparison::Positional(differing) if differing.is_empty() => {
            writeln!(out, "CONSISTENT: cart search matches search")?;
        }
        Comparison::Positional(differing) => {
            write_list(out, "INCONSISTENT: differing identifiers", differing)?;
        }
    }

    Ok(())
}
