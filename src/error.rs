use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Checkout error: {0}")]
    Checkout(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort_unstable();
        AppError::Validation(fields.join(", "))
    }
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Validation(fields) => {
                format!("Please check the following fields: {}", fields.replace('_', " "))
            }
            AppError::EmptyCart => "Your cart is empty.".to_string(),
            AppError::Checkout(msg) => format!("Could not place order: {}", msg),
            _ => self.to_string(),
        }
    }
}
