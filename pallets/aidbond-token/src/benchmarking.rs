//! Benchmarking setup for pallet-aidbond-token

use super::*;

#[allow(unused)]
use crate::Pallet as AidBondToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_runtime::traits::Saturating;

/// Credit `who` with `amount`, keeping `TotalSupply` in step.
fn fund<T: Config>(who: &T::AccountId, amount: T::Balance) {
    Balances::<T>::mutate(who, |b| *b = b.saturating_add(amount));
    TotalSupply::<T>::mutate(|s| *s = s.saturating_add(amount));
}

fn amount<T: Config>() -> T::Balance {
    T::Balance::from(1_000_000u32)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        fund::<T>(&caller, amount::<T>());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount::<T>());

        assert_eq!(Balances::<T>::get(&recipient), amount::<T>());
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), amount::<T>());

        assert_eq!(Allowances::<T>::get(&caller, &spender), amount::<T>());
    }

    #[benchmark]
    fn increase_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        Allowances::<T>::insert(&caller, &spender, amount::<T>());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), amount::<T>());

        assert_eq!(Allowances::<T>::get(&caller, &spender), amount::<T>() + amount::<T>());
    }

    #[benchmark]
    fn decrease_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        Allowances::<T>::insert(&caller, &spender, amount::<T>());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), amount::<T>());

        assert!(Allowances::<T>::get(&caller, &spender).is_zero());
    }

    #[benchmark]
    fn transfer_from() {
        let caller: T::AccountId = whitelisted_caller();
        let from: T::AccountId = account("from", 0, 0);
        let to: T::AccountId = account("to", 0, 0);
        fund::<T>(&from, amount::<T>());
        Allowances::<T>::insert(&from, &caller, amount::<T>());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), from.clone(), to.clone(), amount::<T>());

        assert_eq!(Balances::<T>::get(&to), amount::<T>());
        assert!(Allowances::<T>::get(&from, &caller).is_zero());
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        // Owner, so the call succeeds under either burn policy
        Owner::<T>::put(&caller);
        fund::<T>(&caller, amount::<T>());
        let supply = TotalSupply::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount::<T>());

        assert!(Balances::<T>::get(&caller).is_zero());
        assert_eq!(TotalSupply::<T>::get(), supply - amount::<T>());
    }

    #[benchmark]
    fn burn_from() {
        let caller: T::AccountId = whitelisted_caller();
        let from: T::AccountId = account("from", 0, 0);
        fund::<T>(&from, amount::<T>());
        Allowances::<T>::insert(&from, &caller, amount::<T>());
        let supply = TotalSupply::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), from.clone(), amount::<T>());

        assert!(Balances::<T>::get(&from).is_zero());
        assert_eq!(TotalSupply::<T>::get(), supply - amount::<T>());
    }

    #[benchmark]
    fn pause() {
        let caller: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&caller);
        Paused::<T>::put(false);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let caller: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&caller);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(!Paused::<T>::get());
    }

    #[benchmark]
    fn transfer_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("new_owner", 0, 0);
        Owner::<T>::put(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn renounce_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Owner::<T>::get(), None);
    }

    impl_benchmark_test_suite!(AidBondToken, crate::mock::new_test_ext(), crate::mock::Test);
}
