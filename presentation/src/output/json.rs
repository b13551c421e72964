//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use gitvote_domain::{CommitId, Election, Tally, UserId, Vote};
use serde::Serialize;

/// Formats results as pretty-printed JSON documents
pub struct JsonFormatter;

/// One commit's row in the JSON tally
#[derive(Debug, Serialize)]
struct TallyRow<'a> {
    commit: &'a CommitId,
    votes: usize,
    voters: Vec<&'a UserId>,
}

impl JsonFormatter {
    fn render<T: Serialize + ?Sized>(value: &T) -> String {
        let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
        json.push('\n');
        json
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_votes(&self, votes: &[Vote]) -> String {
        Self::render(votes)
    }

    fn format_tally(&self, tally: &Tally) -> String {
        let rows: Vec<_> = tally
            .ranked()
            .into_iter()
            .map(|(commit, votes)| TallyRow {
                commit,
                votes,
                voters: tally
                    .voters(commit)
                    .map(|users| users.iter().collect())
                    .unwrap_or_default(),
            })
            .collect();
        Self::render(&rows)
    }

    fn format_election(&self, election: &Election) -> String {
        Self::render(election)
    }
}
