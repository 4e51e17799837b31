//! Terminal summaries. Individual warnings are already on stderr via the
//! log; these print the totals.

use console::Style;
use tokensmith::{Build, DeprecatedToken, Emission};

pub fn print_build(build: &Build) {
    print_counts(&build.emission);
    println!(
        "{} {}",
        Style::new().green().bold().apply_to("wrote"),
        build.output.display()
    );
}

pub fn print_check(emission: &Emission) {
    print_counts(emission);
    if emission.has_warnings() {
        println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to(format!("{} token(s) dropped", emission.warnings.len()))
        );
    } else {
        println!("{}", Style::new().green().apply_to("all tokens resolved"));
    }
}

pub fn print_deprecated(tokens: &[DeprecatedToken]) {
    if tokens.is_empty() {
        println!("no deprecated tokens");
        return;
    }
    let dim = Style::new().dim();
    for token in tokens {
        match &token.replaced_by {
            Some(replacement) => println!(
                "{} {} {}",
                Style::new().yellow().apply_to(&token.identifier),
                dim.apply_to("->"),
                replacement
            ),
            None => println!(
                "{} {}",
                Style::new().yellow().apply_to(&token.identifier),
                dim.apply_to("(no replacement)")
            ),
        }
    }
}

fn print_counts(emission: &Emission) {
    let label = Style::new().bold();
    for section in &emission.sections {
        println!("{:>10} {}", label.apply_to(section.title), section.len());
    }
    let warnings = if emission.has_warnings() {
        Style::new().yellow()
    } else {
        Style::new().dim()
    };
    println!(
        "{:>10} {}",
        label.apply_to("Warnings"),
        warnings.apply_to(emission.warnings.len())
    );
    if !emission.deprecated.is_empty() {
        println!(
            "{:>10} {}",
            label.apply_to("Deprecated"),
            emission.deprecated.len()
        );
    }
}
