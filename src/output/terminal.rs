// Colored terminal output for similarity graphs and word profiles.

use colored::Colorize;

use crate::pipeline::corpus::Corpus;
use crate::text::frequency::FrequencyMap;

/// Display the graph: one line per document with its neighbors, then the
/// edge list and any documents left unconnected.
///
/// `show_words` > 0 also prints up to that many shared words per edge.
pub fn display_graph(corpus: &Corpus, show_words: usize) {
    let graph = &corpus.graph;

    println!(
        "\n{}",
        format!(
            "=== Similarity Graph ({} documents, {} edges) ===",
            graph.vertex_count(),
            graph.edge_count()
        )
        .bold()
    );
    println!(
        "  {}",
        format!(
            "Edge rule: at least {} shared words of {}+ letters",
            corpus.params.shared_word_threshold, corpus.params.min_word_len
        )
        .dimmed()
    );
    println!();

    for doc in &corpus.documents {
        let neighbors = graph.neighbors(&doc.id);
        let degree = if neighbors.is_empty() {
            "0".dimmed()
        } else {
            neighbors.len().to_string().bright_green()
        };
        println!(
            "  {:<32} {:>6} words  {:>5} distinct  degree {}",
            doc.id.bold(),
            doc.frequencies.total(),
            doc.frequencies.len(),
            degree
        );
        if !neighbors.is_empty() {
            println!("      Neighbors: {}", neighbors.join(", ").dimmed());
        }
    }

    let edges = graph.edges();
    if !edges.is_empty() {
        println!("\n  {}", "Edges:".bold());
        for (a, b) in edges {
            println!("    {} {} {}", a, "--".bright_blue(), b);
            if show_words > 0 {
                if let Some(shared) = corpus.shared_words(a, b) {
                    let words: Vec<&str> = shared.iter().copied().take(show_words).collect();
                    let list = super::preview_words(&words, 100);
                    println!("      {} shared: {}", shared.len(), list.dimmed());
                }
            }
        }
    }

    let isolated = graph.isolated();
    if !isolated.is_empty() {
        println!(
            "\n  {} {} unconnected: {}",
            "~".yellow(),
            isolated.len(),
            isolated.join(", ")
        );
    }
    println!();
}

/// Display the most frequent words of a single document.
pub fn display_profile(id: &str, frequencies: &FrequencyMap, top: usize) {
    println!(
        "\n{}",
        format!(
            "=== Word Profile: {} ({} words, {} distinct) ===",
            id,
            frequencies.total(),
            frequencies.len()
        )
        .bold()
    );
    println!();

    if frequencies.is_empty() {
        println!("  No words found.");
        return;
    }

    let ranked = frequencies.top(top);
    let max = ranked.first().map(|&(_, c)| c).unwrap_or(1).max(1);
    let bar_width: usize = 20;

    for (i, (word, count)) in ranked.iter().enumerate() {
        let filled = ((*count as f64 / max as f64) * bar_width as f64).round() as usize;
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(bar_width - filled));
        println!(
            "  {:>3}. {:<24} {} {}",
            i + 1,
            word,
            bar.bright_blue(),
            count
        );
    }
    println!();
}
