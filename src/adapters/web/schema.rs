use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentRequest {
	pub customer_name:  String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub customer_email: Option<String>,
	pub amount:         f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentResponse {
	pub success:        bool,
	pub transaction_id: Uuid,
	pub amount:         f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HealthResponse {
	pub status:  String,
	pub service: String,
}

impl HealthResponse {
	pub fn ok() -> Self {
		Self {
			status:  "ok".to_string(),
			service: "payment".to_string(),
		}
	}
}
