//! Weighted PageRank over the sentence similarity graph
//!
//! Power iteration with dangling-node mass spread uniformly, iterated until
//! the L1 change drops below the threshold.

use std::cmp::Ordering;

use super::graph::SimilarityGraph;

/// Result of a ranking run
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Score per node, summing to 1
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// Final L1 delta
    pub delta: f64,
    pub converged: bool,
}

impl RankResult {
    /// Top `n` nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        top_n(&self.scores, n)
    }
}

/// Top `n` indexes by score; equal scores keep document order
pub fn top_n(scores: &[f64], n: usize) -> Vec<(usize, f64)> {
    let mut indexed: Vec<_> = scores.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        other => other,
    });
    indexed.truncate(n);
    indexed
}

/// TextRank sentence centrality
#[derive(Debug, Clone)]
pub struct TextRank {
    /// Damping factor
    pub damping: f64,
    pub max_iterations: usize,
    /// Convergence threshold on the L1 delta
    pub threshold: f64,
}

impl Default for TextRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl TextRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Score every node of the graph.
    ///
    /// Returns the last iterate even when the threshold was not reached.
    pub fn run(&self, graph: &SimilarityGraph) -> RankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return RankResult {
                scores: Vec::new(),
                iterations: 0,
                delta: 0.0,
                converged: true,
            };
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d]).sum();
            new_scores.fill(teleport + self.damping * dangling_mass / n as f64);

            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node);
                if total_weight <= 0.0 {
                    continue;
                }
                for (neighbor, weight) in graph.neighbors(node) {
                    new_scores[neighbor] += self.damping * node_score * weight / total_weight;
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        tracing::debug!(
            "TextRank finished after {} iterations (delta {:.2e})",
            iterations,
            delta
        );

        RankResult {
            scores,
            iterations,
            delta,
            converged: delta <= self.threshold,
        }
    }
}
