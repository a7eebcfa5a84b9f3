//! Fuzz frame decoding against arbitrary wire bytes.
//!
//! Decoding untrusted bytes must never panic, and anything that decodes must
//! re-encode to an equivalent frame.

#![no_main]

use libfuzzer_sys::fuzz_target;
use parley_proto::Frame;

fuzz_target!(|data: &[u8]| {
    if let Ok(frame) = Frame::decode(data) {
        let mut wire = Vec::new();
        frame.encode(&mut wire).expect("decoded frame must re-encode");

        let reparsed = Frame::decode(&wire).expect("re-encoded frame must decode");
        assert_eq!(frame.payload, reparsed.payload);
        assert_eq!(frame.header.opcode_raw(), reparsed.header.opcode_raw());
    }
});
