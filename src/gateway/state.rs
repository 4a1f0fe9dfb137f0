use std::sync::Arc;

use crate::analysis::NewsAnalyzer;

#[derive(Clone, Debug)]
pub struct HandlerState {
    pub analyzer: Arc<NewsAnalyzer>,
}

impl HandlerState {
    pub fn new(analyzer: NewsAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}
