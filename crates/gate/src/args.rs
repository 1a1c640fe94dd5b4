//! Delegate parameter lists as slot storage.
//!
//! A gate's argument list is a tuple `(T0, T1, ..)` of [`SlotValue`] types, in
//! the delegate's parameter order. [`Arguments`] turns the tuple into its slot
//! storage and back; [`SlotAt`] gives typed access to the slot at a fixed
//! index. Both are implemented for tuples of arity 1 through 12. There is no
//! implementation for `()`: a gate needs at least one slot.

use crate::{Slot, SlotValue};

mod sealed {
	pub trait Sealed {}
}

/// A delegate parameter list that a gate can collect.
pub trait Arguments: sealed::Sealed + Sized {
	/// One [`Slot`] per parameter, in declaration order.
	type Slots: Clone;

	/// Number of parameters.
	const ARITY: usize;

	/// Storage with every slot unset.
	fn vacant_slots() -> Self::Slots;

	/// Resets every slot to its canonical default and unset.
	fn reset_slots(slots: &mut Self::Slots);

	/// Returns the set flag of the slot at `index`, or false if out of range.
	fn is_set_at(slots: &Self::Slots, index: usize) -> bool;

	/// Returns true if every slot is set.
	fn all_set(slots: &Self::Slots) -> bool;

	/// Moves the slot values out as the delegate's arguments.
	fn into_arguments(slots: Self::Slots) -> Self;
}

/// Typed access to the slot for parameter `I`.
pub trait SlotAt<const I: usize>: Arguments {
	/// Declared type of parameter `I`.
	type Value: SlotValue;

	/// Borrows the slot.
	fn slot(slots: &Self::Slots) -> &Slot<Self::Value>;

	/// Mutably borrows the slot.
	fn slot_mut(slots: &mut Self::Slots) -> &mut Slot<Self::Value>;
}

macro_rules! tuple_arguments {
	($( ($($T:ident . $idx:tt),+) )+) => {
		$( tuple_arguments!(@tuple [$($T),+] $(($T $idx))+); )+
	};
	(@tuple $all:tt $(($T:ident $idx:tt))+) => {
		tuple_arguments!(@arguments $(($T $idx))+);
		$( tuple_arguments!(@at $all $T $idx); )+
	};
	(@arguments $(($T:ident $idx:tt))+) => {
		impl<$($T: SlotValue),+> sealed::Sealed for ($($T,)+) {}

		impl<$($T: SlotValue),+> Arguments for ($($T,)+) {
			type Slots = ($(Slot<$T>,)+);

			const ARITY: usize = [$($idx),+].len();

			fn vacant_slots() -> Self::Slots {
				($(Slot::<$T>::vacant(),)+)
			}

			fn reset_slots(slots: &mut Self::Slots) {
				$( slots.$idx.reset(); )+
			}

			fn is_set_at(slots: &Self::Slots, index: usize) -> bool {
				match index {
					$( $idx => slots.$idx.is_set(), )+
					_ => false,
				}
			}

			fn all_set(slots: &Self::Slots) -> bool {
				true $( && slots.$idx.is_set() )+
			}

			fn into_arguments(slots: Self::Slots) -> Self {
				($(slots.$idx.into_value(),)+)
			}
		}
	};
	(@at [$($All:ident),+] $T:ident $idx:tt) => {
		impl<$($All: SlotValue),+> SlotAt<$idx> for ($($All,)+) {
			type Value = $T;

			#[inline]
			fn slot(slots: &Self::Slots) -> &Slot<$T> {
				&slots.$idx
			}

			#[inline]
			fn slot_mut(slots: &mut Self::Slots) -> &mut Slot<$T> {
				&mut slots.$idx
			}
		}
	};
}

tuple_arguments! {
	(A0 . 0)
	(A0 . 0, A1 . 1)
	(A0 . 0, A1 . 1, A2 . 2)
	(A0 . 0, A1 . 1, A2 . 2, A3 . 3)
	(A0 . 0, A1 . 1, A2 . 2, A3 . 3, A4 . 4)
	(A0 . 0, A1 . 1, A2 . 2, A3 . 3, A4 . 4, A5 . 5)
	(A0 . 0, A1 . 1, A2 . 2, A3 . 3, A4 . 4, A5 . 5, A6 . 6)
	(A0 . 0, A1 . 1, A2 . 2, A3 . 3, A4 . 4, A5 . 5, A6 . 6, A7 . 7)
	(A0 . 0, A1 . 1, A2 . 2, A3 . 3, A4 . 4, A5 . 5, A6 . 6, A7 . 7, A8 . 8)
	(A0 . 0, A1 . 1, A2 . 2, A3 . 3, A4 . 4, A5 . 5, A6 . 6, A7 . 7, A8 . 8, A9 . 9)
	(A0 . 0, A1 . 1, A2 . 2, A3 . 3, A4 . 4, A5 . 5, A6 . 6, A7 . 7, A8 . 8, A9 . 9, A10 . 10)
	(A0 . 0, A1 . 1, A2 . 2, A3 . 3, A4 . 4, A5 . 5, A6 . 6, A7 . 7, A8 . 8, A9 . 9, A10 . 10, A11 . 11)
}
