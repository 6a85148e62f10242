mod backend_proxy;

pub use backend_proxy::{strip_hop_by_hop, BackendProxy, API_PREFIX};
