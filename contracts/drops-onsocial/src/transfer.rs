use crate::*;

#[near]
impl Contract {
    /// NEP-171-style transfer of a drop token. Requires exactly
    /// 1 yoctoNEAR attached; no approval system, holders only.
    #[payable]
    pub fn nft_transfer(&mut self, receiver_id: AccountId, token_id: TokenId, memo: Option<String>) {
        require!(
            env::attached_deposit() == ONE_YOCTO,
            "Requires attached deposit of exactly 1 yoctoNEAR"
        );
        let sender_id = env::predecessor_account_id();
        let Some(token) = self.tokens_by_id.get(&token_id) else {
            env::panic_str("Token not found");
        };
        require!(token.owner_id == sender_id, "Sender does not own this token");
        require!(
            receiver_id != sender_id,
            "Receiver must differ from sender"
        );

        self.internal_transfer(&sender_id, &receiver_id, &token_id);
        events::nep171::emit_transfer(
            sender_id.as_str(),
            receiver_id.as_str(),
            std::slice::from_ref(&token_id),
            memo.as_deref(),
        );
    }
}

impl Contract {
    fn internal_transfer(&mut self, sender_id: &AccountId, receiver_id: &AccountId, token_id: &TokenId) {
        self.remove_token_from_owner(sender_id, token_id);
        self.add_token_to_owner(receiver_id, token_id);
        if let Some(record) = self.tokens_by_id.get_mut(token_id) {
            record.owner_id = receiver_id.clone();
        }
    }

    fn remove_token_from_owner(&mut self, owner_id: &AccountId, token_id: &TokenId) {
        if let Some(tokens) = self.tokens_per_owner.get_mut(owner_id) {
            tokens.remove(token_id);
        }
    }
}
