use crate::*;
use near_sdk::json_types::U128;

/// Which mints the per-wallet cap counts.
/// `PerCall` bounds each call's quantity on its own; `Lifetime` bounds the
/// running total of paid and signed mints per wallet. Set mints are gated
/// by current holdings instead and never count here.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LimitMode {
    PerCall,
    Lifetime,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct MintConfig {
    /// Price per token on the public mint path, in yoctoNEAR.
    pub mint_price: U128,
    /// Price for the whole set mint, in yoctoNEAR.
    pub set_price: U128,
    pub max_per_wallet: u32,
    pub limit_mode: LimitMode,
    /// Tokens granted by one `mint_set` call.
    pub set_size: u32,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            mint_price: U128(DEFAULT_MINT_PRICE),
            set_price: U128(DEFAULT_SET_PRICE),
            max_per_wallet: DEFAULT_MAX_PER_WALLET,
            limit_mode: LimitMode::PerCall,
            set_size: DEFAULT_SET_SIZE,
        }
    }
}

impl MintConfig {
    pub fn validate(&self) -> Result<(), MintError> {
        if !(1..=MAX_MINT_BATCH).contains(&self.max_per_wallet) {
            return Err(MintError::InvalidQuantity(format!(
                "max_per_wallet must be 1..={MAX_MINT_BATCH}"
            )));
        }
        if !(1..=MAX_MINT_BATCH).contains(&self.set_size) {
            return Err(MintError::InvalidQuantity(format!(
                "set_size must be 1..={MAX_MINT_BATCH}"
            )));
        }
        Ok(())
    }

    pub fn validate_patch(&self, patch: &MintConfigUpdate) -> Result<(), MintError> {
        let mut patched = self.clone();
        patched.apply_patch(patch);
        patched.validate()
    }

    pub fn apply_patch(&mut self, patch: &MintConfigUpdate) {
        if let Some(v) = patch.mint_price {
            self.mint_price = v;
        }
        if let Some(v) = patch.set_price {
            self.set_price = v;
        }
        if let Some(v) = patch.max_per_wallet {
            self.max_per_wallet = v;
        }
        if let Some(v) = patch.limit_mode {
            self.limit_mode = v;
        }
        if let Some(v) = patch.set_size {
            self.set_size = v;
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct MintConfigUpdate {
    pub mint_price: Option<U128>,
    pub set_price: Option<U128>,
    pub max_per_wallet: Option<u32>,
    pub limit_mode: Option<LimitMode>,
    pub set_size: Option<u32>,
}
