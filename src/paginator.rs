use std::future::Future;

use crate::error::{ApiError, ApiResult};
use crate::models::Poll;

/// Anything that can serve one page of polls by offset and size
pub trait PageSource {
    fn fetch_page(&self, skip: u32, limit: u32) -> impl Future<Output = ApiResult<Vec<Poll>>>;
}

/// Walks a [`PageSource`] from offset 0 until a short or empty page
pub struct Paginator<'a, S> {
    source: &'a S,
    page_size: u32,
}

impl<'a, S: PageSource> Paginator<'a, S> {
    pub fn new(source: &'a S, page_size: u32) -> ApiResult<Self> {
        if page_size == 0 {
            return Err(ApiError::InvalidPageSize);
        }

        Ok(Self { source, page_size })
    }

    /// Fetch every poll in server order
    ///
    /// A page shorter than `page_size` is taken as the last one, so a source
    /// holding an exact multiple of `page_size` costs one extra empty request.
    /// Any error discards what was already collected.
    pub async fn collect_all(&self) -> ApiResult<Vec<Poll>> {
        let mut all_polls = Vec::new();
        let mut skip: u32 = 0;
        let mut pages = 0usize;

        loop {
            let page = self.source.fetch_page(skip, self.page_size).await?;
            pages += 1;

            tracing::debug!(
                "Fetched page {} (skip={}, limit={}): {} polls",
                pages,
                skip,
                self.page_size,
                page.len()
            );

            if page.len() > self.page_size as usize {
                return Err(ApiError::OversizedPage {
                    requested: self.page_size,
                    received: page.len(),
                });
            }

            let is_last = page.len() < self.page_size as usize;
            all_polls.extend(page);

            if is_last {
                break;
            }

            skip = next_offset(skip, self.page_size)?;
        }

        tracing::info!("Fetched {} polls in {} pages", all_polls.len(), pages);

        Ok(all_polls)
    }
}

/// Offset of the page after the one at `skip`
fn next_offset(skip: u32, page_size: u32) -> ApiResult<u32> {
    skip.checked_add(page_size)
        .ok_or(ApiError::OffsetOverflow { skip, page_size })
}
