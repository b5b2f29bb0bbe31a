use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum MintError {
    InvalidQuantity(String),
    InvalidSignature(String),
    SignatureAlreadyUsed,
    SetMintLimitExceeded(String),
    InsufficientPayment(String),
    NotOwner,
}

impl std::fmt::Display for MintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuantity(msg) => write!(f, "Invalid mint quantity: {}", msg),
            Self::InvalidSignature(msg) => write!(f, "Invalid signature: {}", msg),
            Self::SignatureAlreadyUsed => write!(f, "Signature already used"),
            Self::SetMintLimitExceeded(msg) => write!(f, "Set mint limit exceeded: {}", msg),
            Self::InsufficientPayment(msg) => write!(f, "Insufficient payment: {}", msg),
            Self::NotOwner => write!(f, "Only the contract owner can perform this action"),
        }
    }
}

impl MintError {
    pub fn bad_pass(reason: impl std::fmt::Display) -> Self {
        Self::InvalidSignature(reason.to_string())
    }
    pub fn payment_short(required: u128, got: u128) -> Self {
        Self::InsufficientPayment(format!("required {}, got {}", required, got))
    }
}
