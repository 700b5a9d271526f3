use std::sync::Arc;

use super::{catalog::Catalog, config::Config};

pub struct State {
    pub config: Config,
    pub catalog: Catalog,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let catalog = Catalog::builtin();

        Arc::new(Self { config, catalog })
    }
}
