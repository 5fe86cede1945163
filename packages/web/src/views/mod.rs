use api::ApiClient;

mod client_detail;
mod clients;

pub use client_detail::ClientDetail;
pub use clients::Clients;

/// Fresh client per request; construction is cheap and nothing is shared
/// between calls.
pub(crate) fn make_api() -> ApiClient {
    ApiClient::from_env()
}
