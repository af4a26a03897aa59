//! Read side: fetch the current state of a startlist.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use crate::application::error::{ApplicationResult, StartlistApplicationError};
use crate::domain::identifiers::StartlistId;
use crate::domain::repository::StartlistRepository;
use crate::domain::snapshot::StartlistSnapshot;

#[derive(Clone)]
pub struct GetStartlistQuery {
    repository: Arc<dyn StartlistRepository>,
}

impl GetStartlistQuery {
    #[must_use]
    pub fn new(repository: Arc<dyn StartlistRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// `NotFound` if the startlist was never saved, `Persistence` on storage failure.
    pub async fn execute(
        &self,
        startlist_id: &StartlistId,
    ) -> ApplicationResult<StartlistSnapshot> {
        self.repository
            .find_by_id(startlist_id)
            .await?
            .map(|startlist| startlist.to_snapshot())
            .ok_or_else(|| StartlistApplicationError::NotFound(startlist_id.clone()))
    }
}

impl std::fmt::Debug for GetStartlistQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetStartlistQuery").finish_non_exhaustive()
    }
}
