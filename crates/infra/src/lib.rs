mod config;
mod services;
mod system;

pub use config::Config;
pub use services::*;
pub use system::ISys;
use system::RealSys;

use std::sync::Arc;

/// Everything the controller and usecases need from the outside world:
/// configuration, the clock and the three external collaborators.
#[derive(Clone)]
pub struct Context {
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub timings: Arc<dyn TimingsSource>,
    pub geo: Arc<dyn GeoLocator>,
    pub notifications: Arc<dyn NotificationSink>,
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> Context {
    let config = Config::new();
    Context {
        timings: Arc::new(HttpTimingsSource::new(&config)),
        geo: Arc::new(IpGeoLocator::new(&config)),
        notifications: Arc::new(DesktopNotificationSink::new()),
        sys: Arc::new(RealSys {}),
        config,
    }
}
