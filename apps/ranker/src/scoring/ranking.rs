//! Ranking — whole-corpus reduction from built records to ranked rows.
//!
//! Total score is `gen_ai_score + ai_ml_score`. Ranks are dense and
//! descending: the highest distinct total gets 1, the next distinct total 2,
//! and ties share a rank. Row order is left as given.

use std::collections::HashMap;

use crate::models::{RankedRecord, ResumeRecord};

/// A record paired with the identifier of the document it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRecord {
    pub source: String,
    pub record: ResumeRecord,
}

/// Dense rank of each total, highest total first.
pub fn dense_ranks(totals: &[u8]) -> Vec<u32> {
    let mut distinct = totals.to_vec();
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.dedup();

    let rank_of: HashMap<u8, u32> = distinct
        .iter()
        .enumerate()
        .map(|(i, total)| (*total, i as u32 + 1))
        .collect();

    totals.iter().map(|t| rank_of[t]).collect()
}

/// Assigns totals and ranks over the complete set of built records.
pub fn rank_records(built: Vec<BuiltRecord>) -> Vec<RankedRecord> {
    let totals: Vec<u8> = built.iter().map(|b| b.record.total_score()).collect();
    let ranks = dense_ranks(&totals);

    built
        .into_iter()
        .zip(totals.into_iter().zip(ranks))
        .map(|(b, (total_score, rank))| RankedRecord {
            source: b.source,
            record: b.record,
            total_score,
            rank,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NOT_FOUND;

    fn record(gen_ai: u8, ai_ml: u8) -> ResumeRecord {
        ResumeRecord {
            name: NOT_FOUND.to_string(),
            contact_details: "N/A | N/A".to_string(),
            university: NOT_FOUND.to_string(),
            year_of_study: NOT_FOUND.to_string(),
            course: NOT_FOUND.to_string(),
            discipline: "Unidentified Discipline".to_string(),
            cgpa_or_percentage: NOT_FOUND.to_string(),
            key_skills: String::new(),
            gen_ai_score: gen_ai,
            ai_ml_score: ai_ml,
            supporting_info: NOT_FOUND.to_string(),
        }
    }

    fn built(name: &str, gen_ai: u8, ai_ml: u8) -> BuiltRecord {
        BuiltRecord {
            source: name.to_string(),
            record: record(gen_ai, ai_ml),
        }
    }

    #[test]
    fn test_dense_ranks_with_ties() {
        assert_eq!(dense_ranks(&[6, 6, 4, 2]), vec![1, 1, 2, 3]);
    }

    #[test]
    fn test_dense_ranks_all_tied() {
        assert_eq!(dense_ranks(&[3, 3, 3]), vec![1, 1, 1]);
    }

    #[test]
    fn test_dense_ranks_unsorted_input() {
        assert_eq!(dense_ranks(&[2, 5, 3, 5, 2]), vec![3, 1, 2, 1, 3]);
    }

    #[test]
    fn test_dense_ranks_empty() {
        assert!(dense_ranks(&[]).is_empty());
    }

    #[test]
    fn test_rank_records_keeps_processing_order() {
        let ranked = rank_records(vec![
            built("a.pdf", 1, 1),
            built("b.pdf", 3, 3),
            built("c.pdf", 2, 1),
            built("d.pdf", 1, 2),
        ]);

        let sources: Vec<&str> = ranked.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["a.pdf", "b.pdf", "c.pdf", "d.pdf"]);

        let totals: Vec<u8> = ranked.iter().map(|r| r.total_score).collect();
        assert_eq!(totals, vec![2, 6, 3, 3]);

        let ranks: Vec<u32> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![3, 1, 2, 2]);
    }

    #[test]
    fn test_rank_records_empty_corpus() {
        assert!(rank_records(vec![]).is_empty());
    }
}
