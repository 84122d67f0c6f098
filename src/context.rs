// src/context.rs
use anyhow::Result;

use crate::config::{ClientConfig, PlaceholderIds};
use crate::core::JobBoardClient;
use crate::session::Session;

/// Application-level state handed to each screen
#[derive(Debug)]
pub struct AppContext {
    pub config: ClientConfig,
    pub session: Session,
    client: JobBoardClient,
}

impl AppContext {
    pub fn new(config: ClientConfig, session: Session) -> Result<Self> {
        let client = JobBoardClient::new(&config)?;
        Ok(Self {
            config,
            session,
            client,
        })
    }

    pub fn client(&self) -> &JobBoardClient {
        &self.client
    }

    pub fn placeholder_ids(&self) -> PlaceholderIds {
        self.config.placeholder_ids()
    }
}
