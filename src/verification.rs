//! Verification-assist triage
//!
//! Flags sentences that make claims worth checking independently and
//! suggests generic places to check them. Uses its own trigger list,
//! separate from the explainer and virality vocabularies.

use crate::lexicon::Lexicon;
use crate::models::VerificationTriage;
use crate::segment;

pub const VERIFICATION_TRIGGERS: Lexicon =
    Lexicon::new(&["claim", "reveals", "secret", "miracle", "hiding", "exposed"]);

pub const REFERENCE_SOURCES: &[&str] = &[
    "World Health Organization (WHO)",
    "Peer-reviewed academic journals",
    "Official government or institutional publications",
];
pub const CITED_SOURCES: &[&str] = &["official institutional sources cited"];

pub const STATUS_UNSUPPORTED: &str = "no supporting institutional references detected";
pub const STATUS_REFERENCED: &str = "appears to reference institutional reporting";

pub fn fact_check_assist(text: &str) -> VerificationTriage {
    let flagged_claims: Vec<String> = segment::claim_sentences(text)
        .into_iter()
        .filter(|sentence| VERIFICATION_TRIGGERS.matches_any(sentence))
        .map(str::to_string)
        .collect();

    let (sources, status) = if flagged_claims.is_empty() {
        (CITED_SOURCES, STATUS_REFERENCED)
    } else {
        (REFERENCE_SOURCES, STATUS_UNSUPPORTED)
    };

    VerificationTriage {
        flagged_claims,
        sources: sources.to_vec(),
        status,
    }
}
