/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use httpmock::MockServer;
use smarteru::v2::{Client, Creds};

pub(crate) const ACCOUNT_API_KEY: &str = "test-account-key";
pub(crate) const USER_API_KEY: &str = "test-user-key";

pub(crate) fn test_creds() -> Creds {
    Creds::new(ACCOUNT_API_KEY, USER_API_KEY)
}

/// Client pointed at the mock server
pub(crate) fn mock_client(server: &MockServer) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();
    Client::with_http_client(test_creds(), reqwest::Client::new(), &server.base_url()).unwrap()
}

/// Form body the client posts for an envelope
#[allow(dead_code)]
pub(crate) fn package(xml: &str) -> String {
    format!("Package={}", urlencoding::encode(xml))
}

/// Successful response envelope around `info`
#[allow(dead_code)]
pub(crate) fn success(info: &str) -> String {
    format!("<SmarterU><Result>Success</Result><Info>{info}</Info><Errors></Errors></SmarterU>")
}

/// Successful response envelope carrying non-fatal errors
#[allow(dead_code)]
pub(crate) fn success_with_errors(info: &str, errors: &[(&str, &str)]) -> String {
    format!(
        "<SmarterU><Result>Success</Result><Info>{info}</Info><Errors>{}</Errors></SmarterU>",
        error_list(errors)
    )
}

/// Failed response envelope
#[allow(dead_code)]
pub(crate) fn failure(errors: &[(&str, &str)]) -> String {
    format!(
        "<SmarterU><Result>Failed</Result><Info></Info><Errors>{}</Errors></SmarterU>",
        error_list(errors)
    )
}

fn error_list(errors: &[(&str, &str)]) -> String {
    errors
        .iter()
        .map(|(code, message)| {
            format!("<Error><ErrorID>{code}</ErrorID><ErrorMessage>{message}</ErrorMessage></Error>")
        })
        .collect()
}

/// `<Page>n</Page>` as it appears inside a posted form body
#[allow(dead_code)]
pub(crate) fn encoded_page(page: u32) -> String {
    urlencoding::encode(&format!("<Page>{page}</Page>")).into_owned()
}
