// Colored terminal output for term summaries, similarities and predictions.

use std::fmt::Display;

use colored::Colorize;

use crate::corpus::Document;

use super::{round4, ClassificationReport, SimilarityReport, TopTerms, VectorizeReport};

/// One line per document: how many tokens it produced.
pub fn display_token_counts(documents: &[Document]) {
    for doc in documents {
        let count = doc.tokens.len();
        let count_str = if count == 0 {
            format!("{count} tokens").red()
        } else {
            format!("{count} tokens").normal()
        };
        println!("  {} -> {}", doc.id.bold(), count_str);
    }
}

fn display_top_terms<T: Display>(title: &str, rows: &[TopTerms<T>]) {
    println!("\n{}", format!("--- {title} ---").bold());
    for row in rows {
        println!("\n  {} {}", row.topic.bold(), format!("({} tokens)", row.token_count).dimmed());
        if row.terms.is_empty() {
            println!("    {}", "(no terms)".dimmed());
            continue;
        }
        for (term, weight) in &row.terms {
            println!("    {:<24} {}", term, weight);
        }
    }
}

pub fn display_vectorize(report: &VectorizeReport) {
    println!(
        "\n{}",
        format!("=== Vocabulary: {} terms ===", report.vocabulary_size).bold()
    );
    display_top_terms("Raw Frequency (Top Terms)", &report.raw_frequency);

    let rounded: Vec<TopTerms<f64>> = report
        .tfidf
        .iter()
        .map(|row| TopTerms {
            topic: row.topic.clone(),
            token_count: row.token_count,
            terms: row
                .terms
                .iter()
                .map(|(t, w)| (t.clone(), round4(*w)))
                .collect(),
        })
        .collect();
    let title = format!("TF-IDF (Top Terms, normalization: {})", report.normalization);
    display_top_terms(&title, &rounded);
}

pub fn display_similarity(report: &SimilarityReport) {
    println!(
        "\n{}",
        format!(
            "=== Cosine Similarity ({}, normalization: {}) ===",
            report.weighting, report.normalization
        )
        .bold()
    );

    if report.scores.is_empty() {
        println!("  Need at least two documents to compare.");
        return;
    }

    for s in &report.scores {
        let score = format!("{:.4}", s.score);
        let colored_score = if s.score >= 0.5 {
            score.bright_green()
        } else if s.score >= 0.2 {
            score.bright_yellow()
        } else {
            score.bright_blue()
        };
        println!("  {} vs {}: {}", s.reference, s.other, colored_score);
    }
}

pub fn display_classification(report: &ClassificationReport) {
    println!(
        "\n{}",
        format!(
            "=== Classification ({}-dim embeddings, {} embedded terms) ===",
            report.dimension, report.embedded_terms
        )
        .bold()
    );

    for (label, predicted) in report.labels.iter().zip(&report.predictions) {
        let marker = if label == predicted {
            "ok".green()
        } else {
            "!!".red().bold()
        };
        println!("  {:<4} {:<36} -> {}", marker, label, predicted);
    }

    println!(
        "\n  {}/{} predictions match their label",
        report.correct(),
        report.labels.len()
    );
}
