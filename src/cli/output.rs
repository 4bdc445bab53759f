//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: keys, slugs, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info
//!
//! Secret material goes through [`data`] on stdout; everything else about
//! progress or failure goes to stderr so piped output stays clean.

use std::fmt::Display;

use console::style;

use crate::error::PersistenceWarning;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ switched to acme`
pub fn success(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✓").green(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ no active project`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ 1 secret failed to push`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Report a remote change whose local context was not saved.
pub fn persistence_warning(warning: &PersistenceWarning) {
    warn(&warning.to_string());
}

/// Print a hint message (cyan).
///
/// Example: `→ run: windkeep login`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  organization  Acme`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a list item with bullet, marking the active one.
///
/// Example: `  • acme-api` or `  ● acme-api`
pub fn list_item(item: &str, active: bool) {
    if !active {
        println!("  • {}", item);
    } else if colors_enabled() {
        println!("  {} {}", style("●").green(), style(item).bold());
    } else {
        println!("  ● {}", item);
    }
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `no secrets in development`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Print raw data to stdout with no decoration.
pub fn data(msg: &str) {
    println!("{}", msg);
}

/// Print an empty line.
pub fn blank() {
    println!();
}

/// Format a count in bold.
pub fn count(n: usize) -> String {
    if colors_enabled() {
        style(n).bold().to_string()
    } else {
        n.to_string()
    }
}

/// Format a key name in cyan.
///
/// Returns a colored string that can be used inline.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Format a command string in green.
pub fn cmd(c: &str) -> String {
    if colors_enabled() {
        style(c).green().to_string()
    } else {
        c.to_string()
    }
}
