//! # AidBond Token Pallet
//!
//! A single fungible token ledger: balances, allowances, burning, an emergency pause and a
//! transferable, renounceable owner.
//!
//! The whole supply is created at genesis and credited to the owner. There is no mint path;
//! supply only ever shrinks through [`Pallet::burn`] and [`Pallet::burn_from`].
//!
//! ## Checks
//!
//! Every balance-moving call checks, in order:
//!
//! 1. the pause flag ([`Error::ContractPaused`]),
//! 2. ownership, where the call is owner-gated ([`Error::Unauthorized`]),
//! 3. the spender's allowance, for delegated calls ([`Error::InsufficientAllowance`]),
//! 4. the source balance ([`Error::InsufficientBalance`]).
//!
//! The first failing check is the error returned and nothing is written. All arithmetic goes
//! through [`arithmetic`], which fails instead of wrapping.
//!
//! ## Burn policy
//!
//! [`Config::BurnRestrictedToOwner`] selects whether `burn` is open to every holder (`false`)
//! or reserved for the current owner (`true`). `burn_from` is always gated by allowance only.

#![cfg_attr(not(feature = "std"), no_std)]
// `pallet::getter` and the `RuntimeEvent` config item are deprecated upstream; both stay until
// the runtime API for reads lands.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult, ensure, pallet_prelude::*, storage::with_storage_layer,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::{
    AtLeast32BitUnsigned, CheckedAdd, CheckedMul, MaybeSerializeDeserialize, TrailingZeroInput,
    Zero,
};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod arithmetic;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const LOG_TARGET: &str = "runtime::aidbond-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Token amount, already scaled by `10^decimals`.
        type Balance: Parameter
            + Member
            + AtLeast32BitUnsigned
            + Default
            + Copy
            + MaybeSerializeDeserialize
            + MaxEncodedLen;

        /// `true` reserves `burn` for the current owner.
        #[pallet::constant]
        type BurnRestrictedToOwner: Get<bool>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "AidBond")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "ABND")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Always equal to the sum of `Balances`.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T: Config> = StorageValue<_, T::Balance, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, T::Balance, ValueQuery>;

    /// Amount `spender` (second key) may still move out of `owner` (first key).
    /// Spent entries stay in storage at zero.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        T::Balance,
        ValueQuery,
    >;

    /// Current owner. `None` once ownership has been renounced.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Emergency halt for transfers and burns.
    #[pallet::storage]
    #[pallet::getter(fn paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved from one account to another (directly or via allowance)
        Transferred { from: T::AccountId, to: T::AccountId, amount: T::Balance },
        /// Allowance of `spender` over `owner`'s tokens set to `amount`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: T::Balance },
        /// Tokens destroyed, reducing total supply
        Burned { from: T::AccountId, amount: T::Balance },
        /// Transfers and burns halted
        Paused { account: T::AccountId },
        /// Transfers and burns resumed
        Unpaused { account: T::AccountId },
        /// Owner changed. `new_owner` is `None` after renouncement.
        OwnershipTransferred { previous_owner: T::AccountId, new_owner: Option<T::AccountId> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the current owner.
        Unauthorized,
        /// Transfers and burns are halted.
        ContractPaused,
        /// `pause` called while already paused.
        AlreadyPaused,
        /// `unpause` called while not paused.
        NotPaused,
        InsufficientBalance,
        InsufficientAllowance,
        /// `decrease_allowance` by more than the current allowance.
        AllowanceUnderflow,
        ArithmeticOverflow,
        ArithmeticUnderflow,
        /// Argument rejected, e.g. the null account as new owner.
        InvalidArgument,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(
            origin: OriginFor<T>,
            to: T::AccountId,
            amount: T::Balance,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: T::Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_approve(&owner, &spender, amount)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::increase_allowance())]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: T::Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_increase_allowance(&owner, &spender, delta)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::decrease_allowance())]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: T::Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_decrease_allowance(&owner, &spender, delta)
        }

        /// Move `amount` from `from` to `to`, spending the caller's allowance over `from`.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: T::Balance,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::do_transfer_from(&spender, &from, &to, amount)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: T::Balance) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_burn(&who, amount)
        }

        /// Destroy `amount` of `from`'s tokens, spending the caller's allowance over `from`.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::burn_from())]
        pub fn burn_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            amount: T::Balance,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::do_burn_from(&spender, &from, amount)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_pause(&who)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_unpause(&who)
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_transfer_ownership(&who, new_owner)
        }

        /// Give up ownership for good. Pausing and ownership transfer become impossible.
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::renounce_ownership())]
        pub fn renounce_ownership(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_renounce_ownership(&who)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Deploying owner; receives the whole initial supply
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Initial supply in whole tokens, scaled by `10^decimals` at build time
        pub initial_supply: T::Balance,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            let supply = Pallet::<T>::scale_by_decimals(self.initial_supply, self.decimals)
                .expect("Initial supply overflows the balance type");

            match self.owner {
                Some(ref owner) => {
                    assert!(!Pallet::<T>::is_null_account(owner), "Owner must not be the null account");
                    Owner::<T>::put(owner);
                    Balances::<T>::insert(owner, supply);
                },
                None => assert!(supply.is_zero(), "Initial supply requires an owner"),
            }
            TotalSupply::<T>::put(supply);

            log::info!(
                target: LOG_TARGET,
                "Genesis: {:?} base units credited to {:?}",
                supply,
                self.owner
            );
        }
    }
}

impl<T: Config> Pallet<T> {
    // ---------------------------------------------------------------------------------------
    // Transfers and burns
    // ---------------------------------------------------------------------------------------

    /// Move `amount` of `from`'s own tokens to `to`.
    pub fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: T::Balance) -> DispatchResult {
        Self::ensure_not_paused()?;
        Self::move_balance(from, to, amount)?;
        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    /// Move `amount` from `from` to `to` on behalf of `spender`.
    ///
    /// The allowance is checked before the balance. If the balance move fails, the allowance
    /// already spent is rolled back with it.
    pub fn do_transfer_from(
        spender: &T::AccountId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: T::Balance,
    ) -> DispatchResult {
        Self::ensure_not_paused()?;
        with_storage_layer(|| -> DispatchResult {
            Self::consume_allowance(from, spender, amount)?;
            Self::move_balance(from, to, amount)
        })?;
        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    /// Destroy `amount` of `who`'s own tokens.
    pub fn do_burn(who: &T::AccountId, amount: T::Balance) -> DispatchResult {
        Self::ensure_not_paused()?;
        if T::BurnRestrictedToOwner::get() {
            Self::ensure_owner(who)?;
        }
        Self::burn_balance(who, amount)?;
        log::debug!(target: LOG_TARGET, "{:?} burned {:?}", who, amount);
        Self::deposit_event(Event::Burned { from: who.clone(), amount });
        Ok(())
    }

    /// Destroy `amount` of `from`'s tokens on behalf of `spender`.
    pub fn do_burn_from(
        spender: &T::AccountId,
        from: &T::AccountId,
        amount: T::Balance,
    ) -> DispatchResult {
        Self::ensure_not_paused()?;
        with_storage_layer(|| -> DispatchResult {
            Self::consume_allowance(from, spender, amount)?;
            Self::burn_balance(from, amount)
        })?;
        log::debug!(target: LOG_TARGET, "{:?} burned {:?} from {:?}", spender, amount, from);
        Self::deposit_event(Event::Burned { from: from.clone(), amount });
        Ok(())
    }

    // ---------------------------------------------------------------------------------------
    // Allowances
    // ---------------------------------------------------------------------------------------

    /// Set `spender`'s allowance over `owner` to exactly `amount`.
    pub fn do_approve(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: T::Balance,
    ) -> DispatchResult {
        Allowances::<T>::insert(owner, spender, amount);
        Self::deposit_event(Event::Approval { owner: owner.clone(), spender: spender.clone(), amount });
        Ok(())
    }

    pub fn do_increase_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        delta: T::Balance,
    ) -> DispatchResult {
        let amount = arithmetic::checked_add::<T>(Allowances::<T>::get(owner, spender), delta)?;
        Self::do_approve(owner, spender, amount)
    }

    pub fn do_decrease_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        delta: T::Balance,
    ) -> DispatchResult {
        let current = Allowances::<T>::get(owner, spender);
        ensure!(delta <= current, Error::<T>::AllowanceUnderflow);
        let amount = arithmetic::checked_sub::<T>(current, delta)?;
        Self::do_approve(owner, spender, amount)
    }

    // ---------------------------------------------------------------------------------------
    // Ownership and pause
    // ---------------------------------------------------------------------------------------

    pub fn do_pause(who: &T::AccountId) -> DispatchResult {
        Self::ensure_owner(who)?;
        ensure!(!Paused::<T>::get(), Error::<T>::AlreadyPaused);
        Paused::<T>::put(true);
        log::info!(target: LOG_TARGET, "Paused by {:?}", who);
        Self::deposit_event(Event::Paused { account: who.clone() });
        Ok(())
    }

    pub fn do_unpause(who: &T::AccountId) -> DispatchResult {
        Self::ensure_owner(who)?;
        ensure!(Paused::<T>::get(), Error::<T>::NotPaused);
        Paused::<T>::put(false);
        log::info!(target: LOG_TARGET, "Unpaused by {:?}", who);
        Self::deposit_event(Event::Unpaused { account: who.clone() });
        Ok(())
    }

    pub fn do_transfer_ownership(who: &T::AccountId, new_owner: T::AccountId) -> DispatchResult {
        Self::ensure_owner(who)?;
        ensure!(!Self::is_null_account(&new_owner), Error::<T>::InvalidArgument);
        Owner::<T>::put(&new_owner);
        log::info!(target: LOG_TARGET, "Ownership transferred from {:?} to {:?}", who, new_owner);
        Self::deposit_event(Event::OwnershipTransferred {
            previous_owner: who.clone(),
            new_owner: Some(new_owner),
        });
        Ok(())
    }

    pub fn do_renounce_ownership(who: &T::AccountId) -> DispatchResult {
        Self::ensure_owner(who)?;
        Owner::<T>::kill();
        log::info!(target: LOG_TARGET, "Ownership renounced by {:?}", who);
        Self::deposit_event(Event::OwnershipTransferred {
            previous_owner: who.clone(),
            new_owner: None,
        });
        Ok(())
    }

    // ---------------------------------------------------------------------------------------
    // Ledger primitives. None of these check the pause flag; callers do.
    // ---------------------------------------------------------------------------------------

    /// Debit `from` and credit `to`. Both new balances are computed before either is written.
    pub(crate) fn move_balance(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: T::Balance,
    ) -> DispatchResult {
        let from_balance = Balances::<T>::get(from);
        ensure!(amount <= from_balance, Error::<T>::InsufficientBalance);
        if from == to {
            return Ok(());
        }

        let new_from = arithmetic::checked_sub::<T>(from_balance, amount)?;
        let new_to = arithmetic::checked_add::<T>(Balances::<T>::get(to), amount)?;
        Balances::<T>::insert(from, new_from);
        Balances::<T>::insert(to, new_to);
        Ok(())
    }

    /// Debit `from` and shrink the total supply by the same amount.
    pub(crate) fn burn_balance(from: &T::AccountId, amount: T::Balance) -> DispatchResult {
        let balance = Balances::<T>::get(from);
        ensure!(amount <= balance, Error::<T>::InsufficientBalance);

        let new_balance = arithmetic::checked_sub::<T>(balance, amount)?;
        let new_supply = arithmetic::checked_sub::<T>(TotalSupply::<T>::get(), amount)?;
        Balances::<T>::insert(from, new_balance);
        TotalSupply::<T>::put(new_supply);
        Ok(())
    }

    /// Spend `amount` of `spender`'s allowance over `owner`.
    pub(crate) fn consume_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: T::Balance,
    ) -> DispatchResult {
        let current = Allowances::<T>::get(owner, spender);
        ensure!(amount <= current, Error::<T>::InsufficientAllowance);
        let remaining = arithmetic::checked_sub::<T>(current, amount)?;
        Allowances::<T>::insert(owner, spender, remaining);
        Ok(())
    }

    // ---------------------------------------------------------------------------------------
    // Guards and helpers
    // ---------------------------------------------------------------------------------------

    fn ensure_not_paused() -> DispatchResult {
        ensure!(!Paused::<T>::get(), Error::<T>::ContractPaused);
        Ok(())
    }

    fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        ensure!(Owner::<T>::get().as_ref() == Some(who), Error::<T>::Unauthorized);
        Ok(())
    }

    /// Whether `who` is the account decoded from all-zero bytes.
    pub fn is_null_account(who: &T::AccountId) -> bool {
        matches!(
            T::AccountId::decode(&mut TrailingZeroInput::zeroes()),
            Ok(ref zero) if zero == who
        )
    }

    /// `whole * 10^decimals`.
    pub fn scale_by_decimals(whole: T::Balance, decimals: u8) -> Result<T::Balance, Error<T>> {
        let ten = T::Balance::from(10u32);
        (0..decimals).try_fold(whole, |acc, _| {
            acc.checked_mul(&ten).ok_or(Error::<T>::ArithmeticOverflow)
        })
    }

    /// Check the ledger invariants:
    ///
    /// * the sum of all balances equals `TotalSupply`,
    /// * the owner, if any, is not the null account.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(T::Balance::zero(), |acc, balance| acc.checked_add(&balance))
            .ok_or(sp_runtime::DispatchError::Other("Sum of balances overflows"))?;
        ensure!(
            sum == TotalSupply::<T>::get(),
            sp_runtime::DispatchError::Other("Sum of balances does not match total supply")
        );

        if let Some(owner) = Owner::<T>::get() {
            ensure!(
                !Self::is_null_account(&owner),
                sp_runtime::DispatchError::Other("Owner is the null account")
            );
        }
        Ok(())
    }
}
