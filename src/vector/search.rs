//! Vector Search
//!
//! Nearest-document lookup by cosine similarity.

use super::cosine_similarity;

/// Index and score of the document most similar to `query`.
///
/// Ties keep the earliest document. Returns `None` when there are no documents.
pub fn best_match(query: &[f32], documents: &[Vec<f32>]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;

    for (index, embedding) in documents.iter().enumerate() {
        let score = cosine_similarity(query, embedding);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_match_picks_highest() {
        let docs = vec![vec![0.0, 1.0], vec![1.0, 0.1], vec![-1.0, 0.0]];
        let (index, score) = best_match(&[1.0, 0.0], &docs).unwrap();
        assert_eq!(index, 1);
        assert!(score > 0.9);
    }

    #[test]
    fn test_best_match_tie_keeps_first() {
        let docs = vec![vec![2.0, 0.0], vec![1.0, 0.0]];
        assert_eq!(best_match(&[1.0, 0.0], &docs).map(|(i, _)| i), Some(0));
    }

    #[test]
    fn test_best_match_empty() {
        assert!(best_match(&[1.0], &[]).is_none());
    }
}
