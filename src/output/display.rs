//! Display functions for command results

use super::formatters::{create_progress_bar, word_summary};
use crate::commands::{
    AnalysisResult, BuildResult, DeduceOutcome, DeduceReport, DiscriminateResult, ImpossibleResult,
    NarrowResult,
};
use crate::session::ExhaustReason;
use colored::Colorize;

/// Most words listed inline before eliding
const WORD_LIMIT: usize = 20;

fn header(title: &str, detail: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    if detail.is_empty() {
        println!(" {} ", title.bright_cyan().bold());
    } else {
        println!(
            " {} {} ",
            title.bright_cyan().bold(),
            detail.bright_yellow().bold()
        );
    }
    println!("{}", "═".repeat(60).cyan());
}

/// Print the result of building an index
pub fn print_build_result(result: &BuildResult) {
    header("INDEX BUILT:", &result.output.display().to_string());

    println!("\n📚 {}", "Corpora:".bright_cyan().bold());
    println!("   Answers:      {}", result.answers);
    println!("   Guesses:      {}", result.guesses);
    println!("   Word length:  {}", result.word_len);

    println!("\n📊 {}", "Index:".bright_cyan().bold());
    println!(
        "   Patterns:     {}",
        result.patterns.to_string().bright_yellow().bold()
    );
    println!("   Time taken:   {:.2}s", result.duration.as_secs_f64());
}

/// Print a summary of an index
pub fn print_analysis_result(result: &AnalysisResult) {
    header("INDEX ANALYSIS", "");

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Word length:  {}", result.word_len);
    println!("   Answers:      {}", result.answer_count);
    println!(
        "   Patterns:     {}",
        result.pattern_count.to_string().bright_yellow().bold()
    );

    if result.largest.is_empty() {
        return;
    }

    // Bars are relative to the answer count
    println!("\n📈 {}", "Least informative patterns:".bright_cyan().bold());
    for (pattern, size) in &result.largest {
        let bar = create_progress_bar(*size as f64, result.answer_count as f64, 30);
        println!(
            "   {} {}  [{}] {size}",
            pattern.to_emoji(),
            pattern,
            bar.green()
        );
    }
}

/// Print answer pairs that cannot be told apart
pub fn print_impossible_result(result: &ImpossibleResult) {
    header("INDISTINGUISHABLE ANSWERS", "");

    println!(
        "\n   Compared {} answers in {:.2}s",
        result.answers,
        result.duration.as_secs_f64()
    );

    if result.pairs.is_empty() {
        println!(
            "\n{}",
            "✅ Every pair of answers can be told apart".green().bold()
        );
        return;
    }

    println!(
        "\n{}",
        format!("⚠️  {} pairs can never be told apart:", result.pairs.len())
            .yellow()
            .bold()
    );
    for (a, b) in &result.pairs {
        println!("   {} / {}", a.text().bright_yellow(), b.text().bright_yellow());
    }
}

/// Print the patterns separating two words
pub fn print_discriminate_result(result: &DiscriminateResult) {
    header(
        "DISCRIMINATING:",
        &format!("{} vs {}", result.first, result.second),
    );

    if result.indistinguishable() {
        println!(
            "\n{}",
            "❌ No observable pattern separates these words".red().bold()
        );
        return;
    }

    for (word, patterns) in [
        (&result.first, &result.first_only),
        (&result.second, &result.second_only),
    ] {
        println!(
            "\n🔎 Only {} ({}):",
            word.text().to_uppercase().bright_yellow().bold(),
            patterns.len()
        );
        for pattern in patterns {
            println!("   {} {pattern}", pattern.to_emoji());
        }
    }
}

/// Print each narrowing step and what remains
pub fn print_narrow_result(result: &NarrowResult) {
    header("NARROWING", "");

    println!("\n   Start:  {} candidates", result.initial);
    for (i, step) in result.steps.iter().enumerate() {
        let note = if step.indexed {
            String::new()
        } else {
            " (not indexed, ignored)".bright_black().to_string()
        };
        println!(
            "   {:>2}. {} {}  → {}{note}",
            i + 1,
            step.pattern.to_emoji(),
            step.pattern,
            step.remaining
        );
    }

    println!();
    match result.remaining.as_slice() {
        [] => println!("{}", "❌ No candidate fits every pattern".red().bold()),
        [word] => println!(
            "{}",
            format!("✅ The answer is {}", word.text().to_uppercase())
                .green()
                .bold()
        ),
        words => println!(
            "{} {}",
            format!("{} candidates:", words.len()).yellow().bold(),
            word_summary(words, WORD_LIMIT)
        ),
    }

    if let Some(separators) = &result.separators {
        println!("\n🔎 Patterns that would separate them:");
        if separators.is_empty() {
            println!("   {}", "none".bright_black());
        }
        for pattern in separators {
            println!("   {} {pattern}", pattern.to_emoji());
        }
    }
}

/// Print the outcome of a deduction run
pub fn print_deduce_report(report: &DeduceReport) {
    header("WORDLE", &report.puzzle.to_string());

    if !report.useful.is_empty() {
        println!("\n🧩 {}", "Useful evidence:".bright_cyan().bold());
        for unit in &report.useful {
            println!("   {} @{}", unit.pattern.to_emoji(), unit.source);
        }
    }

    println!();
    match &report.outcome {
        DeduceOutcome::AlreadySolved(solution) => println!(
            "{}",
            format!(
                "✅ Already solved: {}",
                solution.word.text().to_uppercase()
            )
            .green()
            .bold()
        ),
        DeduceOutcome::Resolved(solution) => println!(
            "{}",
            format!(
                "✅ Solved: {} ({} contributors)",
                solution.word.text().to_uppercase(),
                solution.contributors.len()
            )
            .green()
            .bold()
        ),
        DeduceOutcome::Exhausted { reason, remaining } => {
            let why = match reason {
                ExhaustReason::PageBudget => "page budget used up",
                ExhaustReason::FeedEnded => "no more posts",
                ExhaustReason::FeedFailed => "feed failed",
                ExhaustReason::Cancelled => "cancelled",
            };
            println!(
                "{}",
                format!("❌ No unique answer ({why}), {} candidates left", remaining.len())
                    .red()
                    .bold()
            );
            if !remaining.is_empty() {
                println!("   {}", word_summary(remaining, WORD_LIMIT));
            }
        }
    }

    if let Some(text) = &report.announcement {
        println!("\n📣 {text}");
    }
    if report.stored {
        println!("{}", "   (saved)".bright_black());
    }
    println!(
        "{}",
        format!("   {:.2}s", report.duration.as_secs_f64()).bright_black()
    );
}
