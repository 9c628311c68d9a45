//! Shortening service: URL gate, code allocation and share-link building.

use serde::Serialize;

use crate::allocator::{AllocError, CodeAllocator};
use crate::config::LinkgateConfig;
use crate::link_db::LinkRecord;
use crate::shortcode::{check_code_format, CodeFormatError, CodeSource, RandomCodes};
use crate::store::{LinkStore, StoreError};
use crate::url_gate::{RejectReason, Validator};

/// A stored code and the two public URLs that point at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLink {
    pub code: String,
    pub address: String,
    /// `{base}/g/{code}`: redirects straight to the address.
    pub direct_link: String,
    /// `{base}/k/{code}`: landing page showing the address first.
    pub page_link: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("{0}")]
    Rejected(RejectReason),
    #[error(transparent)]
    InvalidCode(#[from] CodeFormatError),
    #[error(transparent)]
    Alloc(#[from] AllocError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ShortenError {
    /// True when the caller sent bad input (the HTTP layer answers 4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self, ShortenError::Rejected(_) | ShortenError::InvalidCode(_))
    }
}

pub struct Shortener<S, C = RandomCodes> {
    validator: Validator,
    allocator: CodeAllocator<S, C>,
    base_url: String,
}

impl<S: LinkStore> Shortener<S, RandomCodes> {
    pub fn new(store: S, cfg: &LinkgateConfig) -> Self {
        Self {
            validator: Validator::new(&cfg.validation),
            allocator: CodeAllocator::new(store, &cfg.allocation),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl<S: LinkStore, C: CodeSource> Shortener<S, C> {
    pub fn with_code_source<C2: CodeSource>(self, codes: C2) -> Shortener<S, C2> {
        Shortener {
            validator: self.validator,
            allocator: self.allocator.with_code_source(codes),
            base_url: self.base_url,
        }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate `raw`, then return the (possibly pre-existing) code for the
    /// sanitized URL.
    pub async fn shorten(&self, raw: &str) -> Result<ShortLink, ShortenError> {
        let address = self
            .validator
            .validate_and_sanitize(raw)
            .into_result()
            .map_err(ShortenError::Rejected)?;

        let code = self.allocator.allocate(&address).await.map_err(|e| {
            if let AllocError::Store(store_err) = &e {
                log_store_fault(store_err);
            }
            e
        })?;

        Ok(self.link_for(code, address))
    }

    /// Look up a code. Malformed codes are refused before touching the store.
    pub async fn resolve(&self, code: &str) -> Result<Option<LinkRecord>, ShortenError> {
        check_code_format(code)?;
        self.allocator
            .store()
            .find_by_code(code)
            .await
            .map_err(|e| {
                log_store_fault(&e);
                ShortenError::Store(e)
            })
    }

    /// Share links for an existing record.
    pub fn share_links(&self, record: &LinkRecord) -> ShortLink {
        self.link_for(record.code.clone(), record.address.clone())
    }

    fn link_for(&self, code: String, address: String) -> ShortLink {
        ShortLink {
            direct_link: format!("{}/g/{}", self.base_url, code),
            page_link: format!("{}/k/{}", self.base_url, code),
            code,
            address,
        }
    }
}

fn log_store_fault(err: &StoreError) {
    match std::error::Error::source(err) {
        Some(cause) => tracing::error!(error = %cause, "link store fault"),
        None => tracing::error!(error = %err, "link store fault"),
    }
}
