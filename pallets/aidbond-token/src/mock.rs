use crate as pallet_aidbond_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        AidBondToken: pallet_aidbond_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

/// Deploying owner; holds the whole supply at genesis.
pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;
/// `u64` decoded from zero bytes.
pub const NULL_ACCOUNT: u64 = 0;

pub const DECIMALS: u8 = 18;
/// Initial supply in whole tokens.
pub const WHOLE_SUPPLY: u128 = 210_000_000;
/// Initial supply in base units: 210,000,000 × 10^18.
pub const SUPPLY: u128 = 210_000_000_000_000_000_000_000_000;

parameter_types! {
    pub static BurnRestrictedToOwner: bool = false;
}

impl pallet_aidbond_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Balance = u128;
    type BurnRestrictedToOwner = BurnRestrictedToOwner;
    type WeightInfo = ();
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_aidbond_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        token_name: b"AidBond".to_vec(),
        token_symbol: b"ABND".to_vec(),
        decimals: DECIMALS,
        initial_supply: WHOLE_SUPPLY,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are not recorded in block 0.
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Same as [`new_test_ext`] with `burn` reserved for the owner.
pub fn new_test_ext_with_owner_only_burn() -> sp_io::TestExternalities {
    BurnRestrictedToOwner::set(true);
    new_test_ext()
}
