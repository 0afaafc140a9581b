//! Response Builder: provider output → TwisterResponse → envelope

use chrono::Utc;
use uuid::Uuid;

use crate::core::provider::trim_twister;
use crate::core::tokenizer::{to_compare_tokens, tokenize_compare, tokenize_display};
use crate::types::{
    ApiError, ApiResponse, ErrorCode, PromptInputs, TwisterResponse, TwisterResult,
};

/// Shape a provider result into the caller-facing twister
pub fn build_response(inputs: &PromptInputs, result: &TwisterResult) -> TwisterResponse {
    let created_at = Utc::now();
    let twister_text = trim_twister(&result.raw_text).to_string();
    let tokens = tokenize_display(&twister_text);
    debug_assert_eq!(to_compare_tokens(&tokens), tokenize_compare(&twister_text));

    TwisterResponse {
        id: format!("twister_{}", created_at.timestamp_millis()),
        theme: inputs.theme.clone(),
        twister_text,
        tokens,
        created_at,
        provider: result.provider,
        model: result.model.clone(),
        usage: result.usage,
    }
}

/// Compare-mode tokens of a built response, as the aligner sees them
pub fn compare_tokens(response: &TwisterResponse) -> Vec<String> {
    to_compare_tokens(&response.tokens)
}

/// `req_<millis>_<6 chars>`
pub fn new_request_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("req_{}_{}", Utc::now().timestamp_millis(), &suffix[..6])
}

pub fn success<T>(message: impl Into<String>, data: T) -> ApiResponse<T> {
    ApiResponse {
        success: true,
        message: message.into(),
        request_id: new_request_id(),
        data: Some(data),
        error: None,
        status_code: 200,
    }
}

pub fn failure<T>(
    status_code: u16,
    message: impl Into<String>,
    code: ErrorCode,
    detail: impl Into<String>,
) -> ApiResponse<T> {
    ApiResponse {
        success: false,
        message: message.into(),
        request_id: new_request_id(),
        data: None,
        error: Some(ApiError::new(code, detail)),
        status_code,
    }
}
