//! Builder wiring independently constructed layers into a [`Client`].

use anyhow::{Result, anyhow};
use poller::Poller;

use crate::{Client, Frontend};

/// Builder for [`Client`] with dependency injection.
#[derive(Default)]
pub struct ClientBuilder {
    poller: Option<Poller>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the poller layer.
    pub fn poller(mut self, poller: Poller) -> Self {
        self.poller = Some(poller);
        self
    }

    /// Inject the frontend layer.
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Assemble the client; both layers are required.
    pub fn build(self) -> Result<Client> {
        Ok(Client {
            poller: self
                .poller
                .ok_or_else(|| anyhow!("client requires a poller"))?,
            frontend: self
                .frontend
                .ok_or_else(|| anyhow!("client requires a frontend"))?,
        })
    }
}
