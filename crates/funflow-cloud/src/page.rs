//! Paginated lookups

use crate::error::Result;
use std::future::Future;
use tracing::{debug, warn};

/// Largest page size the list endpoints accept
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// One page of a list response
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub total_count: Option<u32>,
    pub page_number: Option<u32>,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Whether another page can follow this one.
    ///
    /// Missing or zero pagination metadata ends the walk.
    pub fn has_more(&self, page_size: u32) -> bool {
        match (self.total_count, self.page_number) {
            (Some(total), Some(number)) if total > 0 && number > 0 => {
                u64::from(number) * u64::from(page_size) < u64::from(total)
            }
            _ => false,
        }
    }
}

/// Walk pages from 1 until an item matches `predicate` or pages run out.
pub async fn find_paginated<T, F, Fut, P>(
    page_size: u32,
    mut fetch: F,
    mut predicate: P,
) -> Result<Option<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
    P: FnMut(&T) -> bool,
{
    let mut request_page = 0;
    loop {
        request_page += 1;
        let page = fetch(request_page).await?;
        debug!(
            page = request_page,
            total_count = ?page.total_count,
            page_number = ?page.page_number,
            items = page.items.len(),
            "Fetched page"
        );

        let has_more = page.has_more(page_size);
        if page.total_count.is_none() || page.page_number.is_none() {
            warn!(page = request_page, "Response carries no pagination metadata");
        }

        if let Some(found) = page.items.into_iter().find(|item| predicate(item)) {
            return Ok(Some(found));
        }
        if !has_more {
            return Ok(None);
        }
    }
}
