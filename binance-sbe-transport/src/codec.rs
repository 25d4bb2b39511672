/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Tokio codecs for SBE message framing.
//!
//! Every frame starts with a Simple Open Framing Header: the frame length as a
//! big-endian `u32` (header included) followed by the big-endian `u16`
//! encoding type, `0x5BE0` for little-endian SBE 1.0.

use binance_sbe_core::{CodecConfig, SbeError};
use binance_sbe_spot::SpotMessage;
use bytes::{Buf, BufMut, BytesMut};
use thiserror::Error;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, trace};

/// Encoding type of little-endian SBE 1.0 payloads.
pub const SBE_ENCODING_TYPE: u16 = 0x5BE0;

/// Size of the Simple Open Framing Header.
pub const SOFH_LENGTH: usize = 6;

/// Errors that can occur during codec operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The frame carries a payload other than little-endian SBE.
    #[error("invalid encoding type: {0:#06x}")]
    InvalidEncodingType(u16),

    /// The declared frame length is shorter than the framing header.
    #[error("invalid frame length: {0}")]
    InvalidFrameLength(u32),

    /// Message exceeds maximum size.
    #[error("message too large: {size} bytes exceeds maximum {max_size}")]
    MessageTooLarge {
        /// Actual message size.
        size: usize,
        /// Maximum allowed size.
        max_size: usize,
    },

    /// The payload failed to decode or encode.
    #[error(transparent)]
    Sbe(#[from] SbeError),

    /// I/O error.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Tokio codec splitting a stream into SBE payloads.
///
/// Decoding strips the framing header; encoding prepends it.
#[derive(Debug, Clone)]
pub struct SofhCodec {
    /// Maximum frame size in bytes, header included.
    max_message_size: usize,
}

impl SofhCodec {
    /// Creates a new codec with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_message_size: 1024 * 1024, // 1MB
        }
    }

    /// Sets the maximum frame size.
    #[must_use]
    pub const fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = size;
        self
    }

    /// Returns the maximum frame size.
    #[must_use]
    pub const fn max_message_size(&self) -> usize {
        self.max_message_size
    }

    fn check_size(&self, size: usize) -> Result<u32, CodecError> {
        let too_large = || CodecError::MessageTooLarge {
            size,
            max_size: self.max_message_size,
        };
        if size > self.max_message_size {
            return Err(too_large());
        }
        u32::try_from(size).map_err(|_| too_large())
    }
}

impl Default for SofhCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for SofhCodec {
    type Item = BytesMut;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < SOFH_LENGTH {
            src.reserve(SOFH_LENGTH - src.len());
            return Ok(None);
        }

        let mut header = &src[..SOFH_LENGTH];
        let declared = header.get_u32();
        let encoding_type = header.get_u16();

        if encoding_type != SBE_ENCODING_TYPE {
            debug!(encoding_type, "rejected frame with foreign encoding type");
            return Err(CodecError::InvalidEncodingType(encoding_type));
        }

        let frame_length = declared as usize;
        if frame_length < SOFH_LENGTH {
            debug!(frame_length, "rejected frame shorter than its header");
            return Err(CodecError::InvalidFrameLength(declared));
        }
        if frame_length > self.max_message_size {
            debug!(frame_length, max = self.max_message_size, "rejected oversized frame");
            return Err(CodecError::MessageTooLarge {
                size: frame_length,
                max_size: self.max_message_size,
            });
        }

        if src.len() < frame_length {
            src.reserve(frame_length - src.len());
            return Ok(None);
        }

        let mut frame = src.split_to(frame_length);
        frame.advance(SOFH_LENGTH);
        Ok(Some(frame))
    }
}

impl Encoder<&[u8]> for SofhCodec {
    type Error = CodecError;

    fn encode(&mut self, item: &[u8], dst: &mut BytesMut) -> Result<(), Self::Error> {
        let frame_length = self.check_size(SOFH_LENGTH + item.len())?;
        dst.reserve(SOFH_LENGTH + item.len());
        dst.put_u32(frame_length);
        dst.put_u16(SBE_ENCODING_TYPE);
        dst.put_slice(item);
        Ok(())
    }
}

impl Encoder<BytesMut> for SofhCodec {
    type Error = CodecError;

    fn encode(&mut self, item: BytesMut, dst: &mut BytesMut) -> Result<(), Self::Error> {
        Encoder::<&[u8]>::encode(self, &item[..], dst)
    }
}

/// Tokio codec reading and writing typed spot messages.
#[derive(Debug, Clone, Default)]
pub struct SpotCodec {
    framing: SofhCodec,
    config: CodecConfig,
}

impl SpotCodec {
    /// Creates a codec with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(CodecConfig::new())
    }

    /// Creates a codec with the given configuration.
    ///
    /// # Arguments
    /// * `config` - Range checking and maximum frame size
    #[must_use]
    pub const fn with_config(config: CodecConfig) -> Self {
        Self {
            framing: SofhCodec::new().with_max_message_size(config.max_message_size),
            config,
        }
    }

    /// Returns the codec configuration.
    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn write(&self, item: &SpotMessage, dst: &mut BytesMut) -> Result<(), CodecError> {
        let start = dst.len();
        dst.put_u32(0);
        dst.put_u16(SBE_ENCODING_TYPE);
        let framed = item
            .encode(dst, self.config.range_check_on_encode)
            .map_err(CodecError::from)
            .and_then(|_| self.framing.check_size(dst.len() - start));
        match framed {
            Ok(frame_length) => {
                dst[start..start + 4].copy_from_slice(&frame_length.to_be_bytes());
                Ok(())
            }
            Err(err) => {
                dst.truncate(start);
                Err(err)
            }
        }
    }
}

impl Decoder for SpotCodec {
    type Item = SpotMessage;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Some(payload) = self.framing.decode(src)? else {
            return Ok(None);
        };
        match SpotMessage::decode(&payload, self.config.range_check_on_decode) {
            Ok(message) => {
                trace!(name = message.name(), size = payload.len(), "decoded frame");
                Ok(Some(message))
            }
            Err(err) => {
                debug!(error = %err, size = payload.len(), "rejected frame");
                Err(err.into())
            }
        }
    }
}

impl Encoder<SpotMessage> for SpotCodec {
    type Error = CodecError;

    fn encode(&mut self, item: SpotMessage, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.write(&item, dst)
    }
}

impl Encoder<&SpotMessage> for SpotCodec {
    type Error = CodecError;

    fn encode(&mut self, item: &SpotMessage, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.write(item, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binance_sbe_core::{DecodeError, RangeError};
    use binance_sbe_spot::{ErrorResponse, OrdersResponse};
    use bytes::Bytes;

    fn frame(payload: &[u8]) -> Vec<u8> {
        let mut out = ((payload.len() + SOFH_LENGTH) as u32).to_be_bytes().to_vec();
        out.extend_from_slice(&SBE_ENCODING_TYPE.to_be_bytes());
        out.extend_from_slice(payload);
        out
    }

    fn rate_limited() -> SpotMessage {
        SpotMessage::Error(ErrorResponse {
            code: -1003,
            server_time: Some(1_700_000_000_000_000),
            retry_after: Some(1_700_000_060_000_000),
            msg: "Too many requests.".to_string(),
            data: Bytes::new(),
        })
    }

    #[test]
    fn test_sofh_decode_complete_frame() {
        let mut codec = SofhCodec::new();
        let mut buf = BytesMut::from(&frame(&[1, 2, 3])[..]);

        let payload = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&payload[..], &[1, 2, 3]);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_sofh_decode_incomplete() {
        let mut codec = SofhCodec::new();
        let mut buf = BytesMut::from(&[0u8, 0, 0][..]);
        assert!(codec.decode(&mut buf).unwrap().is_none());

        let bytes = frame(&[0xAA; 100]);
        let mut buf = BytesMut::from(&bytes[..50]);
        assert!(codec.decode(&mut buf).unwrap().is_none());
        assert_eq!(buf.len(), 50);
        assert!(buf.capacity() >= bytes.len());

        buf.extend_from_slice(&bytes[50..]);
        assert_eq!(codec.decode(&mut buf).unwrap().unwrap().len(), 100);
    }

    #[test]
    fn test_sofh_decode_back_to_back() {
        let mut codec = SofhCodec::new();
        let mut bytes = frame(b"first");
        bytes.extend_from_slice(&frame(b"second"));
        let mut buf = BytesMut::from(&bytes[..]);

        assert_eq!(&codec.decode(&mut buf).unwrap().unwrap()[..], b"first");
        assert_eq!(&codec.decode(&mut buf).unwrap().unwrap()[..], b"second");
        assert!(codec.decode(&mut buf).unwrap().is_none());
    }

    #[test]
    fn test_sofh_decode_invalid_encoding_type() {
        let mut codec = SofhCodec::new();
        let mut buf = BytesMut::from(&[0u8, 0, 0, 8, 0xEB, 0x50, 0, 0][..]);
        assert_eq!(
            codec.decode(&mut buf),
            Err(CodecError::InvalidEncodingType(0xEB50))
        );
    }

    #[test]
    fn test_sofh_decode_invalid_length() {
        let mut codec = SofhCodec::new();
        let mut buf = BytesMut::from(&[0u8, 0, 0, 4, 0x5B, 0xE0][..]);
        assert_eq!(codec.decode(&mut buf), Err(CodecError::InvalidFrameLength(4)));
    }

    #[test]
    fn test_sofh_decode_too_large() {
        let mut codec = SofhCodec::new().with_max_message_size(16);
        let mut buf = BytesMut::from(&frame(&[0; 32])[..]);
        assert_eq!(
            codec.decode(&mut buf),
            Err(CodecError::MessageTooLarge {
                size: 38,
                max_size: 16,
            })
        );
    }

    #[test]
    fn test_sofh_encode() {
        let mut codec = SofhCodec::new();
        let mut dst = BytesMut::new();
        codec.encode(&[1u8, 2, 3][..], &mut dst).unwrap();
        assert_eq!(&dst[..], &[0, 0, 0, 9, 0x5B, 0xE0, 1, 2, 3]);

        let mut small = SofhCodec::new().with_max_message_size(8);
        assert!(matches!(
            small.encode(BytesMut::from(&[0u8; 3][..]), &mut dst),
            Err(CodecError::MessageTooLarge { size: 9, max_size: 8 })
        ));
    }

    #[test]
    fn test_spot_codec_round_trip() {
        let mut codec = SpotCodec::new();
        let mut buf = BytesMut::new();
        codec.encode(rate_limited(), &mut buf).unwrap();
        codec
            .encode(&SpotMessage::Orders(OrdersResponse::default()), &mut buf)
            .unwrap();

        let expected_length = rate_limited().encode_to_vec().unwrap().len() + SOFH_LENGTH;
        assert_eq!(&buf[..4], &(expected_length as u32).to_be_bytes());

        assert_eq!(codec.decode(&mut buf).unwrap(), Some(rate_limited()));
        assert_eq!(
            codec.decode(&mut buf).unwrap(),
            Some(SpotMessage::Orders(OrdersResponse::default()))
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn test_spot_codec_encode_failure_leaves_buffer() {
        let mut codec = SpotCodec::new();
        let mut buf = BytesMut::new();
        codec.encode(rate_limited(), &mut buf).unwrap();
        let before = buf.clone();

        let invalid = SpotMessage::Error(ErrorResponse {
            code: i16::MIN,
            ..ErrorResponse::default()
        });
        assert!(matches!(
            codec.encode(invalid, &mut buf),
            Err(CodecError::Sbe(SbeError::Range(RangeError::OutOfRange { .. })))
        ));
        assert_eq!(buf, before);
    }

    #[test]
    fn test_spot_codec_range_check_on_decode() {
        let invalid = SpotMessage::Error(ErrorResponse {
            code: i16::MIN,
            ..ErrorResponse::default()
        });
        let mut body = Vec::new();
        invalid.encode(&mut body, false).unwrap();
        let bytes = frame(&body);

        let mut strict = SpotCodec::new();
        assert!(matches!(
            strict.decode(&mut BytesMut::from(&bytes[..])),
            Err(CodecError::Sbe(SbeError::Range(_)))
        ));

        let mut lenient =
            SpotCodec::with_config(CodecConfig::new().with_range_check_on_decode(false));
        assert_eq!(
            lenient.decode(&mut BytesMut::from(&bytes[..])).unwrap(),
            Some(invalid)
        );
    }

    #[test]
    fn test_spot_codec_unknown_template() {
        let mut codec = SpotCodec::new();
        let mut buf = BytesMut::from(&frame(&[0, 0, 0xE7, 0x03, 3, 0, 2, 0])[..]);
        assert_eq!(
            codec.decode(&mut buf),
            Err(CodecError::Sbe(SbeError::Decode(DecodeError::UnknownTemplate(999))))
        );
    }

    #[test]
    fn test_spot_codec_max_size_from_config() {
        let codec = SpotCodec::with_config(CodecConfig::new().with_max_message_size(64));
        assert_eq!(codec.framing.max_message_size(), 64);
        assert_eq!(codec.config().max_message_size, 64);

        let mut codec = codec;
        let mut buf = BytesMut::new();
        let long = SpotMessage::Error(ErrorResponse {
            code: -1000,
            msg: "x".repeat(100),
            ..ErrorResponse::default()
        });
        assert!(matches!(
            codec.encode(long, &mut buf),
            Err(CodecError::MessageTooLarge { max_size: 64, .. })
        ));
        assert!(buf.is_empty());
    }
}
