//! Guide collection store.
//!
//! Owns the fetched guide list, the current detail guide, the loading flag,
//! and pagination metadata. All mutation goes through the operations here;
//! components read through the accessors only.
//!
//! Calls of the same operation class are not fenced against each other: if
//! two list fetches are in flight, the last response to land wins. Callers
//! drive fetches sequentially in practice, so no request-generation counter
//! is kept.

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{Guide, GuideDraft, GuideFilters, Pagination};

/// Client-side guide collection state.
#[derive(Debug, Default)]
pub struct GuideStore {
    guides: Vec<Guide>,
    current_guide: Option<Guide>,
    loading: bool,
    pagination: Pagination,
}

impl GuideStore {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    pub fn current_guide(&self) -> Option<&Guide> {
        self.current_guide.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Fetch the filtered guide list, replacing `guides` and `pagination`
    /// wholesale. A failed fetch is logged and the previous list stays
    /// displayable; nothing propagates to the caller.
    pub async fn list_guides(&mut self, client: &ApiClient, filters: &GuideFilters) {
        self.loading = true;
        match client.get_guides(filters).await {
            Ok(response) => {
                self.guides = response.guides;
                self.pagination = Pagination {
                    total_pages: response.total_pages,
                    current_page: response.current_page,
                    total: response.total,
                };
            }
            Err(e) => {
                tracing::error!("Error fetching guides: {}", e);
            }
        }
        self.loading = false;
    }

    /// Fetch one guide by id into `current_guide`. A not-found response
    /// clears `current_guide` and returns `Ok` so the caller renders the
    /// not-found state; any other failure propagates and leaves the previous
    /// detail untouched.
    pub async fn load_guide(&mut self, client: &ApiClient, id: &str) -> Result<(), ApiError> {
        self.loading = true;
        let result = client.get_guide(id).await;
        self.loading = false;

        match result {
            Ok(guide) => {
                self.current_guide = Some(guide);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                self.current_guide = None;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error fetching guide {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Post a draft and prepend the canonical guide returned by the backend.
    /// The list is not touched on failure.
    pub async fn create_guide(
        &mut self,
        client: &ApiClient,
        draft: &GuideDraft,
        credential: &str,
    ) -> Result<Guide, ApiError> {
        draft.validate().map_err(ApiError::Validation)?;

        let guide = client.create_guide(draft, credential).await?;
        self.guides.insert(0, guide.clone());
        Ok(guide)
    }

    /// Toggle the acting user's like on a guide and reconcile local state
    /// with the backend's reported result. No local flip happens before the
    /// response arrives; the backend is authoritative on the resulting
    /// state, so a double submission under latency cannot desync. Returns
    /// whether the guide is liked after the toggle.
    ///
    /// Overlapping toggles on the same guide race last-response-wins; the
    /// store does not guard against them.
    pub async fn toggle_like(
        &mut self,
        client: &ApiClient,
        guide_id: &str,
        credential: &str,
        acting_user_id: &str,
    ) -> Result<bool, ApiError> {
        let response = client.like_guide(guide_id, credential).await?;
        let has_liked = response.has_liked;

        if let Some(guide) = self.guides.iter_mut().find(|g| g.id == guide_id) {
            guide.apply_like_state(acting_user_id, has_liked);
        }
        if let Some(current) = self.current_guide.as_mut() {
            if current.id == guide_id {
                current.apply_like_state(acting_user_id, has_liked);
            }
        }

        Ok(has_liked)
    }
}
