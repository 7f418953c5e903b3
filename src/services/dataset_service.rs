use chrono::{DateTime, Duration, Local, Utc};

use crate::models::ResultRecord;

pub const SAMPLE_SENTENCES: [&str; 5] = [
    "Market opens higher as tech stocks rebound.",
    "Analysts predict a mixed quarter for global markets.",
    "Bond yields moved sideways today after inflation data.",
    "Small-cap stocks outperformed on earnings beat.",
    "Commodity prices reacted to supply concerns.",
];

pub const SOURCES: [&str; 3] = ["Bloomberg", "Reuters", "Saras Research"];

const DISPLAY_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Upper bound on the spacing between consecutive records: one year.
pub const MAX_PUBLISH_INTERVAL_MINUTES: i64 = 365 * 24 * 60;

/// Length of a query as the generator sees it, in characters.
pub fn query_len(query: &str) -> usize {
    query.chars().count()
}

/// Produces the full synthetic result list for a query, before pagination.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    publish_interval: Duration,
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new(45)
    }
}

impl DatasetGenerator {
    pub fn new(publish_interval_minutes: i64) -> Self {
        Self {
            publish_interval: Duration::minutes(
                publish_interval_minutes.clamp(1, MAX_PUBLISH_INTERVAL_MINUTES),
            ),
        }
    }

    /// Publication time of the record at `index`. Offsets that leave chrono's
    /// range pin to the earliest representable instant, which keeps the
    /// sequence non-increasing.
    pub fn published_at(&self, now: DateTime<Utc>, index: usize) -> DateTime<Utc> {
        i32::try_from(index)
            .ok()
            .and_then(|step| self.publish_interval.checked_mul(step))
            .and_then(|offset| now.checked_sub_signed(offset))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Generates `total` records for `query`, newest first, anchored at `now`.
    ///
    /// The output is a pure function of its arguments, so two calls with the
    /// same `(query, total, now)` paginate identically.
    pub fn generate(&self, query: &str, total: usize, now: DateTime<Utc>) -> Vec<ResultRecord> {
        let query = query.trim();
        let len = query_len(query);

        (0..total)
            .map(|i| {
                let sentence = SAMPLE_SENTENCES[(i + len) % SAMPLE_SENTENCES.len()];
                let source = SOURCES[i % SOURCES.len()];
                let published_at = self.published_at(now, i);

                ResultRecord {
                    id: format!("{}-{}", query, i),
                    title: format!("{} · {}", query, sentence),
                    snippet: format!(
                        "{} A short summary for \"{}\" result #{}.",
                        sentence,
                        query,
                        i + 1
                    ),
                    long: format!(
                        "{} This is an extended description containing more details about the \
                         result and why it is relevant to the query \"{}\" in the context of \
                         Saras Finance style search.",
                        sentence, query
                    ),
                    source: source.to_string(),
                    date: published_at
                        .with_timezone(&Local)
                        .format(DISPLAY_DATE_FORMAT)
                        .to_string(),
                    published_at,
                    score: score_for(i, len).to_string(),
                }
            })
            .collect()
    }
}

fn score_for(index: usize, query_len: usize) -> i64 {
    (100 - 2 * index as i64) - (query_len % 5) as i64
}
