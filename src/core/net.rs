use reqwest::StatusCode;

use crate::core::ScrapeError;

/// Read the whole response body, accepting nothing but `200 OK`.
///
/// Redirects have already been followed by the transport, so any other
/// status here (including other 2xx codes) is reported as a `Status` error.
pub(crate) async fn get_bytes(resp: reqwest::Response) -> Result<Vec<u8>, ScrapeError> {
    let status = resp.status();
    if status != StatusCode::OK {
        return Err(ScrapeError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.bytes().await?;
    Ok(body.to_vec())
}
