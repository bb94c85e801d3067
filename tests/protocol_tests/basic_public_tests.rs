//! Basic Public Token Request Tests

use tokenreq::protocol::BASIC_PUBLIC_BLINDED_REQ_SIZE;
use tokenreq::{
    BasicPrivateTokenRequest, BasicPublicTokenRequest, CodecConfig, TokenError, TokenRequestCodec,
    TokenType,
};

fn blinded_pattern() -> [u8; BASIC_PUBLIC_BLINDED_REQ_SIZE] {
    let mut blinded = [0u8; BASIC_PUBLIC_BLINDED_REQ_SIZE];
    for (i, b) in blinded.iter_mut().enumerate() {
        *b = i as u8;
    }
    blinded
}

#[test]
fn test_marshal_known_layout() {
    let request = BasicPublicTokenRequest::new(0x2A, blinded_pattern());
    let encoded = request.marshal();

    assert_eq!(encoded.len(), 259);
    assert_eq!(&encoded[..3], &[0x00, 0x02, 0x2A]);
    assert_eq!(&encoded[3..], &blinded_pattern()[..]);
    assert_eq!(Some(encoded.len()), TokenType::BasicPublic.request_len());
}

#[test]
fn test_round_trip() {
    let request = BasicPublicTokenRequest::new(0xFF, blinded_pattern());
    let decoded = BasicPublicTokenRequest::unmarshal(request.marshal()).unwrap();

    assert_eq!(decoded, request);
    assert_eq!(decoded.token_key_id(), 0xFF);
}

#[test]
fn test_every_truncation_fails() {
    let request = BasicPublicTokenRequest::new(1, blinded_pattern());
    let encoded = request.marshal();

    for len in 0..encoded.len() {
        assert!(
            BasicPublicTokenRequest::unmarshal(&encoded[..len]).is_err(),
            "length {} should fail",
            len
        );
    }
}

#[test]
fn test_basic_private_bytes_rejected() {
    let private = BasicPrivateTokenRequest::new(1, [0u8; 48]);

    let result = BasicPublicTokenRequest::unmarshal(private.marshal());
    assert!(matches!(
        result,
        Err(TokenError::TypeMismatch {
            expected: TokenType::BasicPublic,
            found: 0x0001
        })
    ));
}

#[test]
fn test_strict_trailing() {
    let request = BasicPublicTokenRequest::new(1, blinded_pattern());
    let mut encoded = request.marshal().to_vec();
    encoded.push(0xEE);

    assert!(BasicPublicTokenRequest::unmarshal(&encoded).is_ok());
    assert!(BasicPublicTokenRequest::unmarshal_with(&encoded, &CodecConfig::strict()).is_err());
}

#[test]
fn test_single_byte_difference_unequal() {
    let a = BasicPublicTokenRequest::new(1, blinded_pattern());
    let mut blinded = blinded_pattern();
    blinded[255] = 0x00;
    let b = BasicPublicTokenRequest::new(1, blinded);

    assert_ne!(a, b);
}

#[test]
fn test_debug_names_variant() {
    let request = BasicPublicTokenRequest::new(1, blinded_pattern());
    let debug = format!("{:?}", request);

    assert!(debug.starts_with("BasicPublicTokenRequest"));
    assert!(debug.contains("token_key_id: 1"));
}
