#[derive(Debug, Default, Clone)]
pub struct Request {
    pub(crate) url: String,
    pub(crate) headers: Option<Vec<(String, String)>>,
}

#[derive(Default)]
pub struct RequestBuilder {
    request: Request,
}

impl Request {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        self.headers.as_deref().unwrap_or(&[])
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            request: Request::default(),
        }
    }

    pub fn set_url(mut self, url: impl Into<String>) -> Self {
        self.request.url = url.into();

        self
    }

    pub fn set_headers(mut self, headers: &[(String, String)]) -> Self {
        self.request.headers = Some(headers.to_vec());

        self
    }

    pub fn build(self) -> Request {
        self.request
    }
}
