use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::use_cases::process_payment::ProcessPaymentError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub detail: String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Payment failed: {reason}")]
	PaymentDeclined { reason: String },
	#[display("{message}")]
	BadClientDataError { message: String },
	#[display("Internal server error: {message}")]
	InternalServerError { message: String },
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::PaymentDeclined { .. } => "Payment Required".to_string(),
			ApiError::BadClientDataError { .. } => {
				"Unprocessable Entity".to_string()
			}
			ApiError::InternalServerError { .. } => {
				"Internal Server Error".to_string()
			}
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				detail: self.to_string(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::PaymentDeclined { .. } => StatusCode::PAYMENT_REQUIRED,
			ApiError::BadClientDataError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
			ApiError::InternalServerError { .. } => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

impl From<ProcessPaymentError> for ApiError {
	fn from(err: ProcessPaymentError) -> Self {
		match err {
			ProcessPaymentError::InvalidAmount { .. } => {
				ApiError::BadClientDataError {
					message: err.to_string(),
				}
			}
			ProcessPaymentError::Slowdown(_) => ApiError::InternalServerError {
				message: err.to_string(),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use actix_web::body::to_bytes;
	use actix_web::error::ResponseError;

	use super::*;
	use crate::infrastructure::slowdown::slowdown_monitor::SlowdownError;

	#[actix_web::test]
	async fn test_payment_declined_error() {
		let error = ApiError::PaymentDeclined {
			reason: "Insufficient funds".to_string(),
		};
		assert_eq!(error.name(), "Payment Required");
		assert_eq!(error.status_code(), StatusCode::PAYMENT_REQUIRED);

		let resp = error.error_response();
		assert_eq!(resp.status(), StatusCode::PAYMENT_REQUIRED);

		let body = to_bytes(resp.into_body()).await.unwrap();
		let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
		assert_eq!(body.detail, "Payment failed: Insufficient funds");
	}

	#[test]
	fn test_bad_client_data_error() {
		let error = ApiError::from(ProcessPaymentError::InvalidAmount {
			amount: -1.0,
		});
		assert_eq!(error.name(), "Unprocessable Entity");
		assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

		let resp = error.error_response();
		assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
	}

	#[test]
	fn test_internal_server_error() {
		let error = ApiError::from(ProcessPaymentError::Slowdown(
			SlowdownError::StateUnavailable,
		));
		assert_eq!(error.name(), "Internal Server Error");
		assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
		assert!(error.to_string().starts_with("Internal server error: "));

		let resp = error.error_response();
		assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
