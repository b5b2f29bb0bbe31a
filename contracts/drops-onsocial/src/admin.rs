use near_sdk::json_types::{Base64VecU8, U128};
use near_sdk::store::{IterableMap, LookupMap, LookupSet};
use near_sdk::{CurveType, FunctionError, Promise, PublicKey};

use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(
        owner_id: AccountId,
        signer_key: PublicKey,
        mint_config: Option<MintConfig>,
        contract_metadata: Option<DropContractMetadata>,
    ) -> Self {
        require!(
            signer_key.curve_type() == CurveType::ED25519,
            "Signer key must be an ed25519 key"
        );
        let mint_config = mint_config.unwrap_or_default();
        if let Err(err) = mint_config.validate() {
            err.panic();
        }
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            signer_key,
            mint_config,
            tokens_by_id: IterableMap::new(StorageKey::TokensById),
            tokens_per_owner: LookupMap::new(StorageKey::TokensPerOwner),
            minted_per_wallet: LookupMap::new(StorageKey::MintedPerWallet),
            used_signatures: LookupSet::new(StorageKey::UsedSignatures),
            next_token_id: 0,
            proceeds: 0,
            contract_metadata: contract_metadata.unwrap_or_default(),
        }
    }

    /// Transfer the accumulated mint proceeds to the owner.
    /// Returns the amount withdrawn; zero proceeds is a no-op payout.
    #[handle_result]
    pub fn withdraw(&mut self) -> Result<U128, MintError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let amount = self.proceeds;
        self.proceeds = 0;
        if amount > 0 {
            let _ = Promise::new(self.owner_id.clone())
                .transfer(NearToken::from_yoctonear(amount));
            events::emit_withdraw(&self.owner_id, U128(amount));
        }
        Ok(U128(amount))
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    /// Rotate the authorized signer. Outstanding passes signed with the old
    /// key stop validating from this point on.
    #[payable]
    #[handle_result]
    pub fn set_signer_key(&mut self, signer_key: PublicKey) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if signer_key.curve_type() != CurveType::ED25519 {
            return Err(MintError::InvalidSignature(
                "only ed25519 signer keys are supported".into(),
            ));
        }
        let old_key = String::from(&self.signer_key);
        self.signer_key = signer_key;
        events::emit_signer_key_rotated(&self.owner_id, old_key, String::from(&self.signer_key));
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn update_mint_config(&mut self, update: MintConfigUpdate) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.mint_config.validate_patch(&update)?;
        self.mint_config.apply_patch(&update);
        events::emit_mint_config_updated(&self.owner_id, &self.mint_config);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_contract_metadata(
        &mut self,
        name: Option<String>,
        symbol: Option<String>,
        icon: Option<Option<String>>,
        base_uri: Option<Option<String>>,
        reference: Option<Option<String>>,
        reference_hash: Option<Option<Base64VecU8>>,
    ) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if let Some(n) = name {
            self.contract_metadata.name = n;
        }
        if let Some(s) = symbol {
            self.contract_metadata.symbol = s;
        }
        if let Some(v) = icon {
            self.contract_metadata.icon = v;
        }
        if let Some(v) = base_uri {
            self.contract_metadata.base_uri = v;
        }
        if let Some(v) = reference {
            self.contract_metadata.reference = v;
        }
        if let Some(v) = reference_hash {
            self.contract_metadata.reference_hash = v;
        }
        events::emit_contract_metadata_updated(
            &self.owner_id,
            &self.contract_metadata.name,
            &self.contract_metadata.symbol,
            self.contract_metadata.icon.as_deref(),
            self.contract_metadata.base_uri.as_deref(),
            self.contract_metadata.reference.as_deref(),
        );
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_signer_key(&self) -> &PublicKey {
        &self.signer_key
    }

    pub fn get_mint_config(&self) -> &MintConfig {
        &self.mint_config
    }

    pub fn get_proceeds(&self) -> U128 {
        U128(self.proceeds)
    }

    /// Paid plus signed mints for a wallet; what the `lifetime` cap bounds.
    pub fn get_minted_count(&self, account_id: AccountId) -> u32 {
        self.minted_per_wallet.get(&account_id).copied().unwrap_or(0)
    }

    pub fn version(&self) -> String {
        self.version.clone()
    }
}
