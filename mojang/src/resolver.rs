use std::sync::Arc;

use common::CanonicalId;
use fetcher::Fetcher;
use tracing::debug;

use crate::{
    api_response_objects::NameLookupResponse, errors::ResolutionError, utils::json_request,
};

/// Turns a player name into an account id. Nothing is memoised, every call
/// goes to the lookup service.
pub struct IdentityResolver {
    fetcher: Arc<dyn Fetcher>,
    name_lookup_url: String,
}

impl IdentityResolver {
    pub fn new(fetcher: Arc<dyn Fetcher>, name_lookup_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            name_lookup_url: name_lookup_url.into(),
        }
    }

    pub async fn resolve(&self, name: &str) -> Result<CanonicalId, ResolutionError> {
        let url = format!("{}{}", self.name_lookup_url, urlencoding::encode(name));

        let lookup: NameLookupResponse = self
            .fetcher
            .make_web_request(json_request(url))
            .await?
            .json()?;

        let Some(raw_id) = lookup.id else {
            return Err(ResolutionError::MissingId(name.to_string()));
        };

        let id = CanonicalId::parse(raw_id)?;

        debug!("Resolved {} to {}", name, id);

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use fetcher::{FetchError, mock::MockFetcher};

    use super::*;

    const LOOKUP: &str = "https://names.test/";

    fn resolver(fetcher: MockFetcher) -> (IdentityResolver, Arc<MockFetcher>) {
        let fetcher = Arc::new(fetcher);
        (IdentityResolver::new(fetcher.clone(), LOOKUP), fetcher)
    }

    #[tokio::test]
    async fn resolves_id_field() {
        let (resolver, fetcher) = resolver(MockFetcher::new().with_body(
            "https://names.test/Notch",
            r#"{"id":"069a79f444e94726a5befca90e38aaf5","name":"Notch"}"#,
        ));

        let id = resolver.resolve("Notch").await.unwrap();

        assert_eq!(id.as_str(), "069a79f444e94726a5befca90e38aaf5");
        assert_eq!(fetcher.request_count(), 1);
    }

    #[tokio::test]
    async fn every_call_hits_the_service() {
        let (resolver, fetcher) = resolver(
            MockFetcher::new().with_body("https://names.test/Notch", r#"{"id":"abc"}"#),
        );

        resolver.resolve("Notch").await.unwrap();
        resolver.resolve("Notch").await.unwrap();

        assert_eq!(fetcher.request_count(), 2);
    }

    #[tokio::test]
    async fn missing_id_field_fails() {
        let (resolver, _) = resolver(MockFetcher::new().with_body(
            "https://names.test/ghost",
            r#"{"path":"/users/profiles/minecraft/ghost","errorMessage":"Couldn't find any profile"}"#,
        ));

        let result = resolver.resolve("ghost").await;

        assert!(matches!(result, Err(ResolutionError::MissingId(name)) if name == "ghost"));
    }

    #[tokio::test]
    async fn transport_failure_is_a_resolution_error() {
        let (resolver, _) =
            resolver(MockFetcher::new().with_status("https://names.test/ghost", 204));

        let result = resolver.resolve("ghost").await;

        assert!(matches!(
            result,
            Err(ResolutionError::Transport(FetchError::UnexpectedStatus { status: 204, .. }))
        ));
    }

    #[tokio::test]
    async fn malformed_body_fails() {
        let (resolver, _) =
            resolver(MockFetcher::new().with_body("https://names.test/Notch", "<html>"));

        assert!(matches!(
            resolver.resolve("Notch").await,
            Err(ResolutionError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn unsafe_id_is_rejected() {
        let (resolver, _) = resolver(
            MockFetcher::new().with_body("https://names.test/Notch", r#"{"id":"../../etc"}"#),
        );

        assert!(matches!(
            resolver.resolve("Notch").await,
            Err(ResolutionError::InvalidId(_))
        ));
    }

    #[tokio::test]
    async fn name_is_percent_encoded() {
        let (resolver, fetcher) = resolver(MockFetcher::new());

        let _ = resolver.resolve("a b/c").await;

        assert_eq!(fetcher.requested_urls(), vec!["https://names.test/a%20b%2Fc"]);
    }

    #[tokio::test]
    async fn asks_for_json() {
        let (resolver, fetcher) = resolver(
            MockFetcher::new().with_body("https://names.test/Notch", r#"{"id":"abc"}"#),
        );

        resolver.resolve("Notch").await.unwrap();

        let requests = fetcher.requests();
        assert_eq!(
            requests[0].headers(),
            [("accept".to_string(), "application/json".to_string())]
        );
    }
}
