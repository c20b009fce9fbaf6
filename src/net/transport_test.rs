use super::*;

#[test]
fn raw_reply_success_range() {
    assert!(RawReply { status: 200, body: None }.is_success());
    assert!(RawReply { status: 204, body: None }.is_success());
    assert!(!RawReply { status: 199, body: None }.is_success());
    assert!(!RawReply { status: 301, body: None }.is_success());
    assert!(!RawReply { status: 500, body: None }.is_success());
}

#[test]
fn transport_error_displays_detail() {
    assert_eq!(TransportError("connection refused".to_owned()).to_string(), "connection refused");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_transport_is_unavailable_outside_browser() {
    let body = OutgoingMessage { message: "hi".to_owned() };
    let result = futures::executor::block_on(BrowserTransport.post_json("http://127.0.0.1:5000/get_response", &body));
    assert_eq!(result, Err(TransportError("not available on server".to_owned())));
}
