use crate::*;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    pub fn nft_total_supply(&self) -> U128 {
        U128(self.tokens_by_id.len() as u128)
    }

    pub fn nft_token(&self, token_id: TokenId) -> Option<Token> {
        self.tokens_by_id.get(&token_id).map(|record| Token {
            token_id: token_id.clone(),
            owner_id: record.owner_id.clone(),
            minted_at_ms: record.minted_at_ms,
        })
    }

    pub fn nft_tokens(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<Token> {
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100) as usize;

        self.tokens_by_id
            .iter()
            .skip(start)
            .take(limit)
            .map(|(token_id, record)| Token {
                token_id: token_id.clone(),
                owner_id: record.owner_id.clone(),
                minted_at_ms: record.minted_at_ms,
            })
            .collect()
    }

    /// The balance-of accessor: current token count for an account.
    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> U128 {
        self.tokens_per_owner
            .get(&account_id)
            .map(|tokens| U128(tokens.len() as u128))
            .unwrap_or(U128(0))
    }

    pub fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<Token> {
        let Some(tokens_set) = self.tokens_per_owner.get(&account_id) else {
            return vec![];
        };

        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100) as usize;

        tokens_set
            .iter()
            .skip(start)
            .filter_map(|token_id| {
                self.tokens_by_id.get(token_id.as_str()).map(|record| Token {
                    token_id: token_id.clone(),
                    owner_id: record.owner_id.clone(),
                    minted_at_ms: record.minted_at_ms,
                })
            })
            .take(limit)
            .collect()
    }

    pub fn nft_metadata(&self) -> DropContractMetadata {
        self.contract_metadata.clone()
    }
}
