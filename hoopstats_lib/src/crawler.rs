//! The crawl context shared by the fetchers and the pipeline.

use sportsref_api::Client;

use crate::names::TeamNames;
use crate::store::Store;

/// What a roster or schedule fetch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The file was already on disk; no request was made.
    AlreadyFetched,
    Written,
    /// The failure was recorded in the report.
    Failed,
}

/// Page client, artifact store and name rules for one run.
pub struct Crawler {
    client: Client,
    store: Store,
    names: TeamNames,
}

impl Crawler {
    pub fn new(client: Client, store: Store, names: TeamNames) -> Self {
        Self {
            client,
            store,
            names,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn names(&self) -> &TeamNames {
        &self.names
    }
}
