//! Per-sentence claim ranking

use super::RiskScorer;
use crate::models::Claim;
use crate::segment;

/// Score every qualifying sentence and order by risk, highest first.
///
/// The sort is stable: equal scores keep their original sentence order.
pub fn rank_claims(scorer: &RiskScorer, text: &str) -> Vec<Claim> {
    let mut claims: Vec<Claim> = segment::claim_sentences(text)
        .into_iter()
        .map(|sentence| {
            let (risk, tone) = scorer.score_text(sentence);
            Claim {
                claim: sentence.to_string(),
                risk,
                tone,
            }
        })
        .collect();

    claims.sort_by(|a, b| b.risk.cmp(&a.risk));
    claims
}
