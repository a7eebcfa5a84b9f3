//! Async frame I/O over any `AsyncRead`/`AsyncWrite` stream.
//!
//! Both sides of the demo speak the same framing, so the read and write
//! halves live here rather than being duplicated in the server and client
//! binaries. No runtime assumptions beyond tokio's I/O traits.

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    Frame, FrameHeader,
    errors::{ProtocolError, Result},
};

/// Read one frame from the stream.
///
/// Returns `Ok(None)` on a clean disconnect (EOF before any header byte).
/// EOF in the middle of a frame is reported as an error, since it means the
/// peer vanished mid-message.
///
/// # Errors
///
/// Returns `ProtocolError` on I/O failure or if the header fails validation
/// (bad magic, version, or an oversized payload claim).
pub async fn read_frame<R>(reader: &mut R) -> Result<Option<Frame>>
where
    R: AsyncRead + Unpin,
{
    // Fill the header manually so a clean disconnect (zero bytes, then EOF)
    // can be told apart from EOF after a partial header: `read_exact` folds
    // both into `UnexpectedEof`.
    let mut header_buf = [0u8; FrameHeader::SIZE];
    let mut filled = 0;
    while filled < FrameHeader::SIZE {
        let n = reader
            .read(&mut header_buf[filled..])
            .await
            .map_err(|e| ProtocolError::Io(e.to_string()))?;
        if n == 0 {
            if filled == 0 {
                return Ok(None);
            }
            return Err(ProtocolError::Io(format!(
                "connection closed mid-header: got {filled} of {} bytes",
                FrameHeader::SIZE
            )));
        }
        filled += n;
    }

    let header = *FrameHeader::from_bytes(&header_buf)?;

    let payload_size = header.payload_size() as usize;
    let mut payload = vec![0u8; payload_size];
    if payload_size > 0 {
        reader.read_exact(&mut payload).await.map_err(|e| ProtocolError::Io(e.to_string()))?;
    }

    Ok(Some(Frame { header, payload: payload.into() }))
}

/// Write one frame to the stream and flush it.
///
/// # Errors
///
/// Returns `ProtocolError` if encoding fails (oversized payload) or on I/O
/// failure.
pub async fn write_frame<W>(writer: &mut W, frame: &Frame) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut buf = BytesMut::with_capacity(FrameHeader::SIZE + frame.payload.len());
    frame.encode(&mut buf)?;

    writer.write_all(&buf).await.map_err(|e| ProtocolError::Io(e.to_string()))?;
    writer.flush().await.map_err(|e| ProtocolError::Io(e.to_string()))?;

    Ok(())
}
