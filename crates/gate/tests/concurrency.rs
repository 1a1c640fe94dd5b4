#![allow(unused_crate_dependencies)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Barrier, Mutex, OnceLock, Weak};
use std::thread;
use std::time::Duration;

use quorum_gate::{ArgumentGate, ThreadSafe, Unsynchronized};

const TIMEOUT: Duration = Duration::from_secs(10);

#[test]
fn setters_on_many_threads_complete_the_gate() {
	let calls = Mutex::new(Vec::new());
	let gate = ArgumentGate::<(u32, u32, u32, u32)>::builder(["a", "b", "c", "d"])
		.delegate(|args| calls.lock().unwrap().push(args))
		.build()
		.unwrap();
	let barrier = Barrier::new(4);

	let fired: usize = thread::scope(|s| {
		let handles = [
			s.spawn(|| {
				barrier.wait();
				gate.slot::<0>().set(1)
			}),
			s.spawn(|| {
				barrier.wait();
				gate.slot::<1>().set(2)
			}),
			s.spawn(|| {
				barrier.wait();
				gate.slot::<2>().set(3)
			}),
			s.spawn(|| {
				barrier.wait();
				gate.slot::<3>().set(4)
			}),
		];
		handles.into_iter().map(|h| usize::from(h.join().unwrap())).sum()
	});

	assert!(gate.are_all_set());
	drop(gate);

	let calls = calls.into_inner().unwrap();
	assert!(fired >= 1);
	assert_eq!(calls.len(), fired);
	assert!(calls.iter().all(|args| *args == (1, 2, 3, 4)));
}

#[test]
fn one_shot_delegate_never_sees_unset_values() {
	const THREADS: u32 = 8;
	const ROUNDS: u32 = 500;

	let fired = AtomicUsize::new(0);
	let gate = ArgumentGate::<(u32, u32)>::builder(["lhs", "rhs"])
		.one_shot(true)
		.delegate(|(lhs, rhs)| {
			assert!(lhs > 0 && rhs > 0, "delegate saw a cleared slot: ({lhs}, {rhs})");
			fired.fetch_add(1, Ordering::SeqCst);
		})
		.build()
		.unwrap();

	let reported: usize = thread::scope(|s| {
		let handles: Vec<_> = (1..=THREADS)
			.map(|t| {
				let gate = &gate;
				s.spawn(move || {
					let mut count = 0;
					for round in 1..=ROUNDS {
						count += usize::from(gate.slot::<0>().set(t * round));
						count += usize::from(gate.slot::<1>().set(t + round));
					}
					count
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).sum()
	});

	let fired = fired.load(Ordering::SeqCst);
	assert!(fired >= 1);
	assert_eq!(reported, fired);
	assert!(fired <= (THREADS * ROUNDS * 2) as usize);
}

type Reentrant = ArgumentGate<(i32,), Box<dyn Fn((i32,)) + Send + Sync>, ThreadSafe>;

#[test]
fn delegate_can_reenter_its_gate() {
	let cell: Arc<OnceLock<Weak<Reentrant>>> = Arc::new(OnceLock::new());
	let observed = Arc::new(Mutex::new(Vec::new()));

	let delegate = {
		let cell = Arc::clone(&cell);
		let observed = Arc::clone(&observed);
		Box::new(move |(value,): (i32,)| {
			let gate = cell.get().and_then(Weak::upgrade).expect("gate alive");
			observed
				.lock()
				.unwrap()
				.push((value, gate.are_all_set(), gate.slot::<0>().get()));
			gate.slot::<0>().assign(value * 10);
		}) as Box<dyn Fn((i32,)) + Send + Sync>
	};
	let gate: Arc<Reentrant> = Arc::new(ArgumentGate::<(i32,)>::builder(["value"]).one_shot(true).delegate(delegate).build().unwrap());
	cell.set(Arc::downgrade(&gate)).unwrap();

	assert!(gate.slot::<0>().set(7));
	assert_eq!(*observed.lock().unwrap(), [(7, false, 0)]);
	assert_eq!(gate.slot::<0>().get(), 70);
	assert!(gate.slot::<0>().is_set());

	assert!(gate.fire());
	assert_eq!(*observed.lock().unwrap(), [(7, false, 0), (70, false, 0)]);
	assert_eq!(gate.slot::<0>().get(), 700);
}

#[test]
fn unsynchronized_delegate_can_reenter_its_gate() {
	type Local = ArgumentGate<(i32, i32), Box<dyn Fn((i32, i32))>, Unsynchronized>;

	let cell: std::rc::Rc<std::cell::OnceCell<std::rc::Weak<Local>>> = Default::default();
	let delegate = {
		let cell = cell.clone();
		Box::new(move |(a, b): (i32, i32)| {
			let gate = cell.get().and_then(std::rc::Weak::upgrade).expect("gate alive");
			assert!(gate.are_all_set());
			gate.clear();
			gate.slot::<0>().assign(a + b);
		}) as Box<dyn Fn((i32, i32))>
	};
	let gate: std::rc::Rc<Local> =
		std::rc::Rc::new(ArgumentGate::<(i32, i32)>::builder(["a", "b"]).delegate(delegate).build_unsynchronized().unwrap());
	cell.set(std::rc::Rc::downgrade(&gate)).unwrap();

	gate.slot::<0>().set(2);
	assert!(gate.slot::<1>().set(3));
	assert_eq!(gate.pending().as_slice(), ["b"]);
	assert_eq!(gate.slot::<0>().get(), 5);
}

#[test]
fn slow_delegate_does_not_hold_the_lock() {
	let (started_tx, started_rx) = mpsc::channel();
	let (release_tx, release_rx) = mpsc::channel::<()>();
	let release_rx = Mutex::new(release_rx);

	let gate = ArgumentGate::<(u8, u8)>::builder(["a", "b"])
		.delegate(|args| {
			started_tx.send(args).unwrap();
			release_rx.lock().unwrap().recv_timeout(TIMEOUT).expect("released by the test thread");
		})
		.build()
		.unwrap();

	thread::scope(|s| {
		gate.slot::<0>().set(1);
		let firing = s.spawn(|| gate.slot::<1>().set(2));

		assert_eq!(started_rx.recv_timeout(TIMEOUT).unwrap(), (1, 2));
		// The delegate is still running; slot operations must not block.
		gate.slot::<0>().clear();
		assert!(!gate.slot::<0>().is_set());
		assert_eq!(gate.pending().as_slice(), ["a"]);
		assert!(!gate.fire());
		release_tx.send(()).unwrap();

		assert!(firing.join().unwrap());
	});
}
