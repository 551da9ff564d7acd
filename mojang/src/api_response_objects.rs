use serde::Deserialize;

/// Body of the name -> id lookup.
#[derive(Deserialize, Debug)]
pub(crate) struct NameLookupResponse {
    pub(crate) id: Option<String>,
}

/// Body of the id -> profile lookup.
#[derive(Deserialize, Debug)]
pub(crate) struct ProfileResponse {
    #[serde(default)]
    pub(crate) properties: Vec<ProfileProperty>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ProfileProperty {
    pub(crate) name: String,
    pub(crate) value: String,
}

// decoded from the base64 value of the "textures" property
#[derive(Deserialize, Debug)]
pub(crate) struct TexturesPayload {
    pub(crate) textures: TextureSlots,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TextureSlots {
    #[serde(rename = "SKIN")]
    pub(crate) skin: Option<SkinTexture>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SkinTexture {
    pub(crate) url: String,
}
