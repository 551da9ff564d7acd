use std::sync::Arc;

use base64::{Engine, prelude::BASE64_STANDARD};
use common::CanonicalId;
use fetcher::Fetcher;
use tracing::{debug, trace};

use crate::{
    api_response_objects::{ProfileResponse, TexturesPayload},
    errors::AssetError,
    utils::json_request,
};

const TEXTURES_PROPERTY: &str = "textures";

/// Finds the skin texture url for an account id.
///
/// The profile response carries the texture descriptor as a base64 encoded
/// JSON document inside its `textures` property, so there are two decode
/// layers to get through.
pub struct AssetLocator {
    fetcher: Arc<dyn Fetcher>,
    profile_lookup_url: String,
}

impl AssetLocator {
    pub fn new(fetcher: Arc<dyn Fetcher>, profile_lookup_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            profile_lookup_url: profile_lookup_url.into(),
        }
    }

    pub async fn locate(&self, id: &CanonicalId) -> Result<String, AssetError> {
        let url = format!("{}{}", self.profile_lookup_url, id);

        let profile: ProfileResponse = self
            .fetcher
            .make_web_request(json_request(url))
            .await?
            .json()?;

        let skin_url = skin_url_from_profile(profile)?;

        debug!("Skin for {} is at {}", id, skin_url);

        Ok(skin_url)
    }
}

fn skin_url_from_profile(profile: ProfileResponse) -> Result<String, AssetError> {
    if profile.properties.is_empty() {
        return Err(AssetError::NoProperties);
    }

    let Some(textures) = profile
        .properties
        .into_iter()
        .find(|property| property.name == TEXTURES_PROPERTY)
    else {
        return Err(AssetError::NoTexturesProperty);
    };

    let decoded = BASE64_STANDARD.decode(&textures.value)?;

    trace!("{}", String::from_utf8_lossy(&decoded));

    let payload: TexturesPayload =
        serde_json::from_slice(&decoded).map_err(AssetError::InvalidPayload)?;

    payload
        .textures
        .skin
        .map(|skin| skin.url)
        .ok_or(AssetError::MissingSkin)
}

#[cfg(test)]
mod tests {
    use fetcher::mock::MockFetcher;

    use super::*;

    const PROFILE: &str = "https://profiles.test/";
    const ID: &str = "069a79f444e94726a5befca90e38aaf5";
    const SKIN_URL: &str = "http://textures.test/skin/notch";

    fn encode(payload: &str) -> String {
        BASE64_STANDARD.encode(payload)
    }

    fn profile_body(properties: &str) -> String {
        format!(r#"{{"id":"{ID}","name":"Notch","properties":{properties}}}"#)
    }

    fn textures_property(value: &str) -> String {
        format!(r#"[{{"name":"textures","value":"{value}"}}]"#)
    }

    #[tokio::test]
    async fn profile_lookup_asks_for_json() {
        let fetcher = Arc::new(MockFetcher::new());
        let locator = AssetLocator::new(fetcher.clone(), PROFILE);

        let _ = locator.locate(&CanonicalId::parse(ID).unwrap()).await;

        let requests = fetcher.requests();
        assert_eq!(requests[0].url(), format!("{PROFILE}{ID}"));
        assert_eq!(
            requests[0].headers(),
            [("accept".to_string(), "application/json".to_string())]
        );
    }

    async fn locate(body: String) -> Result<String, AssetError> {
        let fetcher =
            Arc::new(MockFetcher::new().with_body(format!("{PROFILE}{ID}"), body.into_bytes()));
        let locator = AssetLocator::new(fetcher, PROFILE);

        locator.locate(&CanonicalId::parse(ID).unwrap()).await
    }

    #[tokio::test]
    async fn reads_skin_url_from_textures_payload() {
        let value = encode(&format!(
            r#"{{"timestamp":1,"profileId":"{ID}","textures":{{"SKIN":{{"url":"{SKIN_URL}"}},"CAPE":{{"url":"http://textures.test/cape"}}}}}}"#
        ));

        let url = locate(profile_body(&textures_property(&value))).await.unwrap();

        assert_eq!(url, SKIN_URL);
    }

    #[tokio::test]
    async fn picks_textures_among_other_properties() {
        let value = encode(&format!(r#"{{"textures":{{"SKIN":{{"url":"{SKIN_URL}"}}}}}}"#));
        let properties = format!(
            r#"[{{"name":"other","value":"x"}},{{"name":"textures","value":"{value}","signature":"sig"}}]"#
        );

        assert_eq!(locate(profile_body(&properties)).await.unwrap(), SKIN_URL);
    }

    #[tokio::test]
    async fn empty_properties_fail() {
        assert!(matches!(
            locate(profile_body("[]")).await,
            Err(AssetError::NoProperties)
        ));
    }

    #[tokio::test]
    async fn missing_properties_key_fails() {
        assert!(matches!(
            locate(format!(r#"{{"id":"{ID}"}}"#)).await,
            Err(AssetError::NoProperties)
        ));
    }

    #[tokio::test]
    async fn no_textures_property_fails() {
        let properties = r#"[{"name":"other","value":"x"}]"#;

        assert!(matches!(
            locate(profile_body(properties)).await,
            Err(AssetError::NoTexturesProperty)
        ));
    }

    #[tokio::test]
    async fn invalid_base64_fails() {
        assert!(matches!(
            locate(profile_body(&textures_property("not base64!"))).await,
            Err(AssetError::InvalidBase64(_))
        ));
    }

    #[tokio::test]
    async fn payload_without_skin_fails() {
        let value = encode(r#"{"textures":{}}"#);

        assert!(matches!(
            locate(profile_body(&textures_property(&value))).await,
            Err(AssetError::MissingSkin)
        ));
    }

    #[tokio::test]
    async fn payload_that_is_not_json_fails() {
        let value = encode("plain text");

        assert!(matches!(
            locate(profile_body(&textures_property(&value))).await,
            Err(AssetError::InvalidPayload(_))
        ));
    }

    #[tokio::test]
    async fn unknown_profile_fails() {
        let fetcher = Arc::new(MockFetcher::new());
        let locator = AssetLocator::new(fetcher, PROFILE);

        assert!(matches!(
            locator.locate(&CanonicalId::parse(ID).unwrap()).await,
            Err(AssetError::Transport(_))
        ));
    }
}
