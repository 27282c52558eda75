use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProcessPaymentCommand {
	pub customer_name:  String,
	pub customer_email: Option<String>,
	pub amount:         f64,
}
