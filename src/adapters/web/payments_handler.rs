use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::{error, info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{PaymentRequest, PaymentResponse};
use crate::domain::payment::PaymentOutcome;
use crate::use_cases::dto::ProcessPaymentCommand;
use crate::use_cases::process_payment::{
	ProcessPaymentError, ProcessPaymentUseCase,
};

#[post("/api/payment")]
pub async fn payment(
	payload: web::Json<PaymentRequest>,
	process_payment_use_case: web::Data<ProcessPaymentUseCase>,
) -> impl Responder {
	let payload = payload.into_inner();
	info!(
		"Processing payment: customer_name={} amount={}",
		payload.customer_name, payload.amount
	);

	let command = ProcessPaymentCommand {
		customer_name:  payload.customer_name.clone(),
		customer_email: payload.customer_email,
		amount:         payload.amount,
	};

	match process_payment_use_case.execute(command).await {
		Ok(PaymentOutcome::Approved {
			transaction_id,
			amount,
		}) => HttpResponse::Ok().json(PaymentResponse {
			success: true,
			transaction_id,
			amount,
		}),
		Ok(PaymentOutcome::Declined { reason }) => {
			warn!(
				"Payment failed: customer_name={} amount={} reason={}",
				payload.customer_name, payload.amount, reason
			);
			ApiError::PaymentDeclined {
				reason: reason.to_string(),
			}
			.error_response()
		}
		Err(e @ ProcessPaymentError::InvalidAmount { .. }) => {
			warn!("Rejected payment request: {e}");
			ApiError::from(e).error_response()
		}
		Err(e) => {
			error!("Payment processing error: {e}");
			ApiError::from(e).error_response()
		}
	}
}

/// Payload extraction settings that report malformed bodies as
/// [`ApiError::BadClientDataError`].
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default().error_handler(|err, _req| {
		warn!("Rejected malformed payment payload: {err}");
		actix_web::Error::from(ApiError::BadClientDataError {
			message: err.to_string(),
		})
	})
}
