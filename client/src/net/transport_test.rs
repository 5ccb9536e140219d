use super::*;

use futures::executor::block_on;
use futures::future::{pending, ready};

const LIMIT: Duration = Duration::from_millis(10_000);

fn ok_reply() -> Result<HttpReply, TransportError> {
    Ok(HttpReply { status: 200, body: "{}".to_owned() })
}

#[test]
fn finished_exchange_beats_deadline() {
    let result = block_on(within_deadline(ready(ok_reply()), pending::<()>(), LIMIT));
    assert_eq!(result, ok_reply());
}

#[test]
fn deadline_fires_when_nothing_arrives() {
    let result = block_on(within_deadline(pending(), ready(()), LIMIT));
    assert_eq!(result, Err(TransportError::Timeout(LIMIT)));
}

#[test]
fn deadline_covers_stalled_body_after_headers() {
    // Headers arrive at once, then the body never does.
    let exchange = async {
        let status = ready(200).await;
        let body: String = pending().await;
        Ok(HttpReply { status, body })
    };

    let result = block_on(within_deadline(exchange, ready(()), LIMIT));
    assert_eq!(result, Err(TransportError::Timeout(LIMIT)));
}

#[test]
fn exchange_errors_pass_through() {
    let failed = ready(Err(TransportError::Network("connection refused".to_owned())));
    let result = block_on(within_deadline(failed, pending::<()>(), LIMIT));
    assert_eq!(result, Err(TransportError::Network("connection refused".to_owned())));
}

#[test]
fn timeout_message_reports_millis() {
    assert_eq!(TransportError::Timeout(LIMIT).to_string(), "request timed out after 10000 ms");
}
