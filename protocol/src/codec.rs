//! Framing and serialization for the chain parameter record.
//!
//! Frames are a 4-byte big-endian length prefix followed by the bincode
//! body. Unknown extension tags decode into opaque elements and re-encode
//! byte-identically, so a node relaying a record from a newer protocol
//! version cannot corrupt it.

use crate::ProtocolError;
use karma_types::ChainParameters;

/// Maximum encoded record size in bytes.
pub const MAX_RECORD_SIZE: usize = 1024 * 1024; // 1 MiB

/// Encode a parameter record into a length-prefixed frame.
pub fn encode(params: &ChainParameters) -> Result<Vec<u8>, ProtocolError> {
    let body = bincode::serialize(params).map_err(|e| ProtocolError::Malformed(e.to_string()))?;
    if body.len() > MAX_RECORD_SIZE {
        return Err(ProtocolError::RecordTooLarge {
            size: body.len(),
            max: MAX_RECORD_SIZE,
        });
    }
    let mut frame = Vec::with_capacity(4 + body.len());
    frame.extend_from_slice(&(body.len() as u32).to_be_bytes());
    frame.extend_from_slice(&body);
    Ok(frame)
}

/// Decode a parameter record from a length-prefixed frame.
pub fn decode(data: &[u8]) -> Result<ChainParameters, ProtocolError> {
    if data.len() < 4 {
        return Err(ProtocolError::Truncated {
            need: 4,
            have: data.len(),
        });
    }
    let len = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
    if len > MAX_RECORD_SIZE {
        return Err(ProtocolError::RecordTooLarge {
            size: len,
            max: MAX_RECORD_SIZE,
        });
    }
    let body = &data[4..];
    if body.len() < len {
        return Err(ProtocolError::Truncated {
            need: len,
            have: body.len(),
        });
    }
    bincode::deserialize(&body[..len]).map_err(|e| ProtocolError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use karma_types::{CreditOptions, CreditReferrerBonusOptions};

    #[test]
    fn frame_round_trip() {
        let mut params = ChainParameters::default();
        params.set_credit_options(CreditOptions {
            seconds_per_day: 43_200,
            ..CreditOptions::default()
        });
        params.set_bonus_options(CreditReferrerBonusOptions::default());

        let frame = encode(&params).unwrap();
        let decoded = decode(&frame).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn default_record_round_trips() {
        let params = ChainParameters::default();
        let frame = encode(&params).unwrap();
        assert_eq!(decode(&frame).unwrap(), params);
    }

    #[test]
    fn truncated_frame_is_rejected() {
        let frame = encode(&ChainParameters::default()).unwrap();
        let err = decode(&frame[..frame.len() - 1]).unwrap_err();
        assert!(matches!(err, ProtocolError::Truncated { .. }));
    }

    #[test]
    fn short_prefix_is_rejected() {
        let err = decode(&[0, 0]).unwrap_err();
        assert!(matches!(err, ProtocolError::Truncated { need: 4, have: 2 }));
    }

    #[test]
    fn oversized_length_is_rejected() {
        let mut frame = vec![0xff, 0xff, 0xff, 0xff];
        frame.extend_from_slice(&[0u8; 8]);
        let err = decode(&frame).unwrap_err();
        assert!(matches!(err, ProtocolError::RecordTooLarge { .. }));
    }

    #[test]
    fn garbage_body_is_malformed() {
        let mut frame = Vec::new();
        frame.extend_from_slice(&4u32.to_be_bytes());
        frame.extend_from_slice(&[0xff, 0xff, 0xff, 0xff]);
        let err = decode(&frame).unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed(_)));
    }
}
