use fetcher::Request;

pub(crate) fn json_request(url: String) -> Request {
    Request::builder()
        .set_url(url)
        .set_headers(&[("accept".into(), "application/json".into())])
        .build()
}
