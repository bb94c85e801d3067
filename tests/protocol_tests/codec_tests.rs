//! Codec Tests
//!
//! Tests for tag dispatch, the shared codec contract, and error taxonomy.

use tokenreq::protocol::{peek_token_type, NAME_KEY_ID_SIZE, SIGNATURE_SIZE};
use tokenreq::{
    BasicPrivateTokenRequest, BasicPublicTokenRequest, CodecConfig, RateLimitedTokenRequest,
    TokenError, TokenRequest, TokenRequestCodec, TokenType,
};

fn all_requests() -> Vec<TokenRequest> {
    vec![
        BasicPrivateTokenRequest::new(3, [0x01; 48]).into(),
        BasicPublicTokenRequest::new(4, [0x02; 256]).into(),
        RateLimitedTokenRequest::new(
            5,
            [0x03; NAME_KEY_ID_SIZE],
            vec![0x04u8; 17],
            [0x05; SIGNATURE_SIZE],
        )
        .unwrap()
        .into(),
    ]
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn test_decode_dispatches_by_tag() {
    for request in all_requests() {
        let decoded = TokenRequest::decode(request.marshal(), &CodecConfig::default()).unwrap();

        assert_eq!(decoded.token_type(), request.token_type());
        assert_eq!(decoded.token_key_id(), request.token_key_id());
        assert_eq!(decoded, request);
    }
}

#[test]
fn test_peek_token_type() {
    let expected = [
        TokenType::BasicPrivate,
        TokenType::BasicPublic,
        TokenType::RateLimited,
    ];
    for (request, token_type) in all_requests().iter().zip(expected) {
        assert_eq!(peek_token_type(request.marshal()).unwrap(), token_type);
    }
}

#[test]
fn test_unknown_tag_rejected() {
    let mut bytes = vec![0x00u8, 0x04, 0x01];
    bytes.extend_from_slice(&[0u8; 48]);

    assert!(matches!(
        TokenRequest::decode(&bytes, &CodecConfig::default()),
        Err(TokenError::UnknownTokenType(0x0004))
    ));
}

#[test]
fn test_empty_input_rejected_by_every_decoder() {
    let config = CodecConfig::default();

    assert!(TokenRequest::decode(&[], &config).is_err());
    assert!(BasicPrivateTokenRequest::unmarshal(&[]).is_err());
    assert!(BasicPublicTokenRequest::unmarshal(&[]).is_err());
    assert!(RateLimitedTokenRequest::unmarshal(&[]).is_err());
    assert!(matches!(
        peek_token_type(&[0x00]),
        Err(TokenError::TruncatedInput {
            field: "token_type",
            ..
        })
    ));
}

#[test]
fn test_cross_variant_decoding_rejected() {
    let requests = all_requests();

    for (i, request) in requests.iter().enumerate() {
        let bytes = request.marshal();
        assert_eq!(BasicPrivateTokenRequest::unmarshal(bytes).is_ok(), i == 0);
        assert_eq!(BasicPublicTokenRequest::unmarshal(bytes).is_ok(), i == 1);
        assert_eq!(RateLimitedTokenRequest::unmarshal(bytes).is_ok(), i == 2);
    }
}

#[test]
fn test_strict_config_applies_through_dispatch() {
    let request: TokenRequest = BasicPublicTokenRequest::new(4, [0x02; 256]).into();
    let mut bytes = request.marshal().to_vec();
    bytes.push(0x00);

    assert!(TokenRequest::decode(&bytes, &CodecConfig::default()).is_ok());
    assert!(matches!(
        TokenRequest::decode(&bytes, &CodecConfig::strict()),
        Err(TokenError::TrailingBytes { remaining: 1 })
    ));
}

// =============================================================================
// Token Types
// =============================================================================

#[test]
fn test_token_type_values() {
    assert_eq!(TokenType::BasicPrivate.as_u16(), 0x0001);
    assert_eq!(TokenType::BasicPublic.as_u16(), 0x0002);
    assert_eq!(TokenType::RateLimited.as_u16(), 0x0003);

    for token_type in TokenType::ALL {
        assert_eq!(TokenType::from_u16(token_type.as_u16()).unwrap(), token_type);
    }
    assert!(TokenType::from_u16(0x0000).is_err());
    assert!(TokenType::from_u16(0xFFFF).is_err());
}

#[test]
fn test_token_type_names() {
    assert_eq!("basic-private".parse::<TokenType>().unwrap(), TokenType::BasicPrivate);
    assert_eq!("rate-limited".parse::<TokenType>().unwrap(), TokenType::RateLimited);
    match "basic".parse::<TokenType>() {
        Err(TokenError::UnknownName { kind, name }) => {
            assert_eq!(kind, "token type");
            assert_eq!(name, "basic");
        }
        other => panic!("Expected UnknownName, got {:?}", other),
    }
    assert_eq!(TokenType::BasicPublic.to_string(), "basic-public (0x0002)");
}

#[test]
fn test_request_len() {
    assert_eq!(TokenType::BasicPrivate.request_len(), Some(51));
    assert_eq!(TokenType::BasicPublic.request_len(), Some(259));
    assert_eq!(TokenType::RateLimited.request_len(), None);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_decode_errors_are_malformed() {
    let mut truncated = all_requests()[2].marshal().to_vec();
    truncated.pop();

    let errors = [
        BasicPrivateTokenRequest::unmarshal(&[]).unwrap_err(),
        BasicPrivateTokenRequest::unmarshal(all_requests()[1].marshal()).unwrap_err(),
        RateLimitedTokenRequest::unmarshal(&truncated).unwrap_err(),
        TokenRequest::decode(&[0x12, 0x34], &CodecConfig::default()).unwrap_err(),
    ];
    for error in errors {
        assert!(error.is_malformed(), "{} should be malformed", error);
    }

    let unknown = "x".parse::<TokenType>().unwrap_err();
    assert!(!unknown.is_malformed());

    let too_long = TokenError::FieldTooLong {
        field: "encrypted_token_request",
        len: 70_000,
        max: 65_535,
    };
    assert!(!too_long.is_malformed());
}

#[test]
fn test_config_builder() {
    assert!(!CodecConfig::default().strict_trailing);
    assert!(CodecConfig::strict().strict_trailing);
    assert_eq!(
        CodecConfig::builder().strict_trailing(true).build(),
        CodecConfig::strict()
    );
}
