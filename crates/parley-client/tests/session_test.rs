//! Session tests against an in-test TCP peer speaking the wire protocol.

use parley_client::{ClientError, Session};
use parley_crypto::transform;
use parley_proto::{
    Frame, FrameHeader, Opcode,
    payloads::session::{Goodbye, KeyIssue},
    wire,
};
use tokio::net::TcpListener;

/// Spawn a one-shot peer that issues `key` and then echoes messages.
async fn spawn_echo_peer(key: &str) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let key = key.to_string();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");

        let issue = KeyIssue { key: key.clone() };
        wire::write_frame(&mut stream, &issue.to_frame().expect("encode")).await.expect("send key");

        while let Some(frame) = wire::read_frame(&mut stream).await.expect("read") {
            match frame.header.opcode_enum() {
                Some(Opcode::Message) => {
                    let plaintext = transform(key.as_bytes(), &frame.payload).expect("decrypt");
                    let echo = transform(key.as_bytes(), &plaintext).expect("encrypt");
                    let reply = Frame::new(FrameHeader::new(Opcode::Message), echo);
                    wire::write_frame(&mut stream, &reply).await.expect("send echo");
                },
                Some(Opcode::Goodbye) => {
                    Goodbye::from_frame(&frame).expect("goodbye payload");
                    break;
                },
                _ => break,
            }
        }
    });

    addr
}

#[tokio::test]
async fn handshake_yields_the_issued_key() {
    let addr = spawn_echo_peer("1234567890").await;

    let session = Session::connect(&addr.to_string()).await.expect("connect");
    assert_eq!(session.key(), "1234567890");
}

#[tokio::test]
async fn send_and_receive_round_trip() {
    let addr = spawn_echo_peer("1234567890").await;
    let mut session = Session::connect(&addr.to_string()).await.expect("connect");

    let sent = session.send(b"hello").await.expect("send");

    // Demo fixture: "hello" under "1234567890".
    assert_eq!(hex::encode(&sent), "a249996d37");

    let (ciphertext, plaintext) = session.recv().await.expect("recv").expect("echo");
    assert_eq!(plaintext, b"hello");

    // The echo is re-encrypted deterministically, so it matches what we sent.
    assert_eq!(ciphertext, sent);
}

#[tokio::test]
async fn goodbye_is_accepted_by_the_peer() {
    let addr = spawn_echo_peer("1234567890").await;
    let session = Session::connect(&addr.to_string()).await.expect("connect");

    session.goodbye("client exit").await.expect("goodbye");
}

#[tokio::test]
async fn server_closing_early_fails_the_handshake() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        drop(stream);
    });

    let result = Session::connect(&addr.to_string()).await;
    assert!(matches!(result, Err(ClientError::Handshake { .. })));
}

#[tokio::test]
async fn non_key_first_frame_fails_the_handshake() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let frame = Frame::new(FrameHeader::new(Opcode::Message), b"not a key".to_vec());
        wire::write_frame(&mut stream, &frame).await.expect("send");
    });

    let result = Session::connect(&addr.to_string()).await;
    assert!(matches!(
        result,
        Err(ClientError::Protocol(parley_proto::ProtocolError::UnexpectedOpcode { .. }))
    ));
}
