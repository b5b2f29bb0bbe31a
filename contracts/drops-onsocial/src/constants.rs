use near_sdk::NearToken;

// Encoding invariant: passes are domain-tagged with this prefix plus the
// contract account id, so a pass signed for one deployment never validates
// on another.
pub const DOMAIN_PREFIX: &str = "onsocial:drops";

pub const DEFAULT_MINT_PRICE: u128 = 10_000_000_000_000_000_000_000; // 0.01 NEAR
pub const DEFAULT_SET_PRICE: u128 = 20_000_000_000_000_000_000_000; // 0.02 NEAR
pub const DEFAULT_MAX_PER_WALLET: u32 = 3;
pub const DEFAULT_SET_SIZE: u32 = 6;

// Gas ceiling per receipt bounds how many tokens one call may mint.
pub const MAX_MINT_BATCH: u32 = 100;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
