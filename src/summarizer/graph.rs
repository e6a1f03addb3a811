//! Sentence similarity graph
//!
//! Every sentence becomes a node; edges carry the cosine similarity of the
//! two sentences' term-frequency vectors.

use rustc_hash::FxHashMap;

use super::stopwords::StopwordFilter;
use super::tokenizer::words;

/// L2-normalized term-frequency vector of one sentence
#[derive(Debug, Clone, Default)]
pub struct TermVector {
    /// term -> normalized weight
    terms: FxHashMap<String, f64>,
}

impl TermVector {
    /// Build from a sentence, skipping stopwords
    pub fn from_sentence(text: &str, stopwords: &StopwordFilter) -> Self {
        let mut terms: FxHashMap<String, f64> = FxHashMap::default();
        for word in words(text) {
            if stopwords.is_stopword(&word) {
                continue;
            }
            *terms.entry(word).or_insert(0.0) += 1.0;
        }

        let norm = terms.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in terms.values_mut() {
                *value /= norm;
            }
        }

        Self { terms }
    }

    /// Cosine similarity, in [0, 1]
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.terms.len() <= other.terms.len() {
            (self, other)
        } else {
            (other, self)
        };

        let dot: f64 = small
            .terms
            .iter()
            .filter_map(|(term, weight)| large.terms.get(term).map(|w| weight * w))
            .sum();

        dot.clamp(0.0, 1.0)
    }
}

/// Dense, undirected, weighted graph over sentences
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraph {
    pub num_nodes: usize,
    /// Row-major `num_nodes * num_nodes` weights, zero diagonal
    weights: Vec<f64>,
    /// Sum of edge weights per node
    totals: Vec<f64>,
}

impl SimilarityGraph {
    pub fn from_vectors(vectors: &[TermVector]) -> Self {
        let n = vectors.len();
        let mut weights = vec![0.0; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let similarity = vectors[i].cosine_similarity(&vectors[j]);
                weights[i * n + j] = similarity;
                weights[j * n + i] = similarity;
            }
        }

        let totals = weights
            .chunks(n.max(1))
            .map(|row| row.iter().sum::<f64>())
            .collect();

        Self {
            num_nodes: n,
            weights,
            totals,
        }
    }

    pub fn weight(&self, a: usize, b: usize) -> f64 {
        self.weights[a * self.num_nodes + b]
    }

    /// Neighbours with a non-zero edge, in node order
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let row = &self.weights[node * self.num_nodes..(node + 1) * self.num_nodes];
        row.iter()
            .copied()
            .enumerate()
            .filter(|&(_, weight)| weight > 0.0)
    }

    pub fn node_total_weight(&self, node: usize) -> f64 {
        self.totals[node]
    }

    /// Nodes without any edge
    pub fn dangling_nodes(&self) -> Vec<usize> {
        (0..self.num_nodes)
            .filter(|&node| self.totals[node] <= 0.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(text: &str) -> TermVector {
        TermVector::from_sentence(text, &StopwordFilter::default())
    }

    #[test]
    fn stopwords_are_excluded_from_terms() {
        let v = vector("The cat is on the mat");
        assert!((v.cosine_similarity(&vector("cat mat")) - 1.0).abs() < 1e-9);
        assert_eq!(v.cosine_similarity(&vector("it is the")), 0.0);
    }

    #[test]
    fn cosine_is_case_insensitive_and_bounded() {
        let a = vector("Budget planning matters");
        let b = vector("budget PLANNING matters");
        let sim = a.cosine_similarity(&b);
        assert!((sim - 1.0).abs() < 1e-9);

        let c = vector("Marketing launch");
        assert_eq!(a.cosine_similarity(&c), 0.0);
    }

    #[test]
    fn graph_is_symmetric_without_self_loops() {
        let vectors = vec![
            vector("Python is a programming language."),
            vector("It is widely used."),
            vector("Python emphasizes readability."),
        ];
        let graph = SimilarityGraph::from_vectors(&vectors);

        assert_eq!(graph.num_nodes, 3);
        for i in 0..3 {
            assert_eq!(graph.weight(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(graph.weight(i, j), graph.weight(j, i));
                assert!((0.0..=1.0).contains(&graph.weight(i, j)));
            }
        }
        assert!(graph.weight(0, 2) > 0.0);
        assert_eq!(graph.dangling_nodes(), vec![1]);
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>().len(), 1);
    }

    #[test]
    fn empty_graph() {
        let graph = SimilarityGraph::from_vectors(&[]);
        assert_eq!(graph.num_nodes, 0);
        assert!(graph.dangling_nodes().is_empty());
    }
}
