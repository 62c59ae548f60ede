//! Weights for pallet-aidbond-token.
//!
//! Reference values until the `runtime-benchmarks` suite is run against production hardware.
//! Storage access counts match the dispatchables in `lib.rs`.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-aidbond-token.
pub trait WeightInfo {
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn increase_allowance() -> Weight;
    fn decrease_allowance() -> Weight;
    fn transfer_from() -> Weight;
    fn burn() -> Weight;
    fn burn_from() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn transfer_ownership() -> Weight;
    fn renounce_ownership() -> Weight;
}

/// Weights for pallet-aidbond-token using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `Paused` (r:1), `Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Allowances` (w:1)
    fn approve() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Allowances` (r:1 w:1)
    fn increase_allowance() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Allowances` (r:1 w:1)
    fn decrease_allowance() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Paused` (r:1), `Allowances` (r:1 w:1), `Balances` (r:2 w:2)
    fn transfer_from() -> Weight {
        Weight::from_parts(25_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `Paused` (r:1), `Owner` (r:1), `Balances` (r:1 w:1), `TotalSupply` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(16_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `Paused` (r:1), `Allowances` (r:1 w:1), `Balances` (r:1 w:1), `TotalSupply` (r:1 w:1)
    fn burn_from() -> Weight {
        Weight::from_parts(22_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `Owner` (r:1), `Paused` (r:1 w:1)
    fn pause() -> Weight {
        Weight::from_parts(9_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Owner` (r:1), `Paused` (r:1 w:1)
    fn unpause() -> Weight {
        Weight::from_parts(9_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Owner` (r:1 w:1)
    fn transfer_ownership() -> Weight {
        Weight::from_parts(9_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `Owner` (r:1 w:1)
    fn renounce_ownership() -> Weight {
        Weight::from_parts(8_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(12_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(25_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(16_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(22_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn pause() -> Weight {
        Weight::from_parts(9_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn unpause() -> Weight {
        Weight::from_parts(9_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(9_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn renounce_ownership() -> Weight {
        Weight::from_parts(8_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
