//! Canonical defaults and nullability for slot value types.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A type that can be held in a gate slot.
///
/// Every slot type has a canonical default: the value an unset slot holds and
/// the value a cleared slot returns to. A type may also declare a null
/// sentinel. Setting a slot to its null value marks the slot as set with the
/// canonical default and, under [`NullPolicy::Suppress`](crate::NullPolicy::Suppress),
/// does not fire the gate.
///
/// `Option<T>` is the nullable slot type; everything else implemented here is
/// non-null. Use [`slot_value_from_default!`](crate::slot_value_from_default)
/// for types whose [`Default`] is the right canonical value.
pub trait SlotValue: Clone + fmt::Debug {
	/// Value held by an unset slot.
	fn canonical_default() -> Self;

	/// Returns true if this value is the type's null sentinel.
	fn is_null(&self) -> bool {
		false
	}
}

macro_rules! zero_default {
	($($ty:ty => $zero:expr),+ $(,)?) => {
		$(
			impl SlotValue for $ty {
				#[inline]
				fn canonical_default() -> Self {
					$zero
				}
			}
		)+
	};
}

zero_default! {
	() => (),
	bool => false,
	char => '\0',
	i8 => 0,
	i16 => 0,
	i32 => 0,
	i64 => 0,
	i128 => 0,
	isize => 0,
	u8 => 0,
	u16 => 0,
	u32 => 0,
	u64 => 0,
	u128 => 0,
	usize => 0,
	f32 => 0.0,
	f64 => 0.0,
	String => String::new(),
	&'static str => "",
	Cow<'static, str> => Cow::Borrowed(""),
}

impl<T: Clone + fmt::Debug> SlotValue for Option<T> {
	#[inline]
	fn canonical_default() -> Self {
		None
	}

	#[inline]
	fn is_null(&self) -> bool {
		self.is_none()
	}
}

impl<T: Clone + fmt::Debug> SlotValue for Vec<T> {
	fn canonical_default() -> Self {
		Vec::new()
	}
}

impl<T: Clone + fmt::Debug> SlotValue for VecDeque<T> {
	fn canonical_default() -> Self {
		VecDeque::new()
	}
}

impl<T: Clone + fmt::Debug> SlotValue for BTreeSet<T> {
	fn canonical_default() -> Self {
		BTreeSet::new()
	}
}

impl<K: Clone + fmt::Debug, V: Clone + fmt::Debug> SlotValue for BTreeMap<K, V> {
	fn canonical_default() -> Self {
		BTreeMap::new()
	}
}

impl<T: SlotValue, const N: usize> SlotValue for [T; N] {
	fn canonical_default() -> Self {
		std::array::from_fn(|_| T::canonical_default())
	}
}

// Smart pointers are null exactly when their pointee is.
macro_rules! pointer_default {
	($($ptr:ident),+) => {
		$(
			impl<T: SlotValue> SlotValue for $ptr<T> {
				fn canonical_default() -> Self {
					$ptr::new(T::canonical_default())
				}

				fn is_null(&self) -> bool {
					(**self).is_null()
				}
			}
		)+
	};
}

pointer_default!(Box, Rc, Arc);

/// Implements [`SlotValue`] for types whose [`Default`] value is canonical.
///
/// ```
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Coordinates {
/// 	lat: f64,
/// 	lon: f64,
/// }
///
/// quorum_gate::slot_value_from_default!(Coordinates);
///
/// use quorum_gate::SlotValue;
/// assert_eq!(Coordinates::canonical_default(), Coordinates::default());
/// ```
#[macro_export]
macro_rules! slot_value_from_default {
	($($ty:ty),+ $(,)?) => {
		$(
			impl $crate::SlotValue for $ty {
				fn canonical_default() -> Self {
					<$ty as ::core::default::Default>::default()
				}
			}
		)+
	};
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(i32::canonical_default() == 0)]
	#[case(u64::canonical_default() == 0)]
	#[case(f64::canonical_default() == 0.0)]
	#[case(!bool::canonical_default())]
	#[case(char::canonical_default() == '\0')]
	#[case(String::canonical_default().is_empty())]
	#[case(<&str>::canonical_default().is_empty())]
	#[case(Vec::<u8>::canonical_default().is_empty())]
	#[case(<[i16; 3]>::canonical_default() == [0, 0, 0])]
	#[case(Option::<String>::canonical_default().is_none())]
	#[case(*Arc::<u32>::canonical_default() == 0)]
	fn canonical_defaults_are_zero_like(#[case] holds: bool) {
		assert!(holds);
	}

	#[test]
	fn only_none_is_null() {
		assert!(None::<i32>.is_null());
		assert!(!Some(0).is_null());
		assert!(!0_i32.is_null());
		assert!(!String::new().is_null());
	}

	#[test]
	fn pointers_forward_nullability() {
		assert!(Box::new(None::<u8>).is_null());
		assert!(!Arc::new(Some(1_u8)).is_null());
		assert!(Rc::<Option<u8>>::canonical_default().is_null());
	}

	#[derive(Debug, Clone, Default, PartialEq)]
	struct Point {
		x: i32,
		y: i32,
	}

	slot_value_from_default!(Point);

	#[test]
	fn default_backed_values() {
		assert_eq!(Point::canonical_default(), Point { x: 0, y: 0 });
		assert!(!Point { x: 1, y: 2 }.is_null());
	}
}
