use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::ops::Range;
use std::time::Duration;
use tracing::debug;

use crate::config::SearchSettings;
use crate::models::{PageEnvelope, ResultRecord, SearchRequest};
use crate::services::dataset_service::{query_len, DatasetGenerator};

/// Page size used by [`SearchProvider::fetch_top_results`].
pub const TOP_RESULTS_PAGE_SIZE: i64 = 10;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Resolves one page of results. Never fails: bad paging input is
    /// normalized and a blank query yields an empty page.
    async fn search(&self, request: SearchRequest) -> PageEnvelope;

    /// First page of results without the pagination metadata.
    async fn fetch_top_results(&self, query: &str) -> Vec<ResultRecord> {
        let request = SearchRequest::new(query)
            .page(1)
            .page_size(TOP_RESULTS_PAGE_SIZE);
        self.search(request).await.items
    }
}

pub fn normalize_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

pub fn normalize_page_size(page_size: Option<i64>, settings: &SearchSettings) -> i64 {
    page_size
        .unwrap_or(settings.default_page_size)
        .clamp(settings.min_page_size, settings.max_page_size)
}

/// Result-set size for a trimmed query of `query_len` characters.
pub fn total_for(query_len: usize, settings: &SearchSettings) -> usize {
    settings.base_total + query_len % settings.total_spread.max(1)
}

/// Index range of `page` within a dataset of `total` records. Pages past the
/// end produce an empty range.
pub fn page_window(page: i64, page_size: i64, total: usize) -> Range<usize> {
    let page_size = page_size.max(0);
    let offset = (page.max(1) - 1).saturating_mul(page_size);
    let start = usize::try_from(offset).unwrap_or(usize::MAX).min(total);
    let end = start.saturating_add(page_size as usize).min(total);
    start..end
}

/// Search backend that fabricates finance headlines instead of calling a
/// real index, then waits a random sub-second delay before answering.
#[derive(Debug, Clone)]
pub struct MockSearchService {
    settings: SearchSettings,
    generator: DatasetGenerator,
}

impl Default for MockSearchService {
    fn default() -> Self {
        Self::new(SearchSettings::default())
    }
}

impl MockSearchService {
    pub fn new(settings: SearchSettings) -> Self {
        let generator = DatasetGenerator::new(settings.publish_interval_minutes);
        Self {
            settings,
            generator,
        }
    }

    /// Builds the envelope for `request` with every timestamp anchored at
    /// `now`. No delay is applied here.
    pub fn build_page(&self, request: &SearchRequest, now: DateTime<Utc>) -> PageEnvelope {
        let query = request.query.trim();
        if query.is_empty() {
            return PageEnvelope::empty(
                request
                    .page_size
                    .unwrap_or(self.settings.default_page_size),
            );
        }

        let page = normalize_page(request.page);
        let page_size = normalize_page_size(request.page_size, &self.settings);
        let total = total_for(query_len(query), &self.settings);

        let mut dataset = self.generator.generate(query, total, now);
        let window = page_window(page, page_size, total);
        let items: Vec<ResultRecord> = dataset.drain(window).collect();

        PageEnvelope {
            items,
            page,
            page_size,
            total,
        }
    }

    fn latency(&self) -> Duration {
        let min = self.settings.latency_min_ms;
        let max = self.settings.latency_max_ms.max(min);
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }
}

#[async_trait]
impl SearchProvider for MockSearchService {
    async fn search(&self, request: SearchRequest) -> PageEnvelope {
        if request.query.trim().is_empty() {
            debug!("blank query, returning empty page");
            return self.build_page(&request, Utc::now());
        }

        let envelope = self.build_page(&request, Utc::now());
        let latency = self.latency();
        debug!(
            query = request.query.trim(),
            page = envelope.page,
            page_size = envelope.page_size,
            total = envelope.total,
            items = envelope.items.len(),
            latency_ms = latency.as_millis() as u64,
            "serving mock search page"
        );

        tokio::time::sleep(latency).await;
        envelope
    }
}
