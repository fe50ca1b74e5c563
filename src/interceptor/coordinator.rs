//! Single-flight refresh coordination shared by every clone of one interceptor.
//!
//! The first request that sees an eligible `401` becomes the refresh leader; requests that see
//! one while the leader's refresh is in flight park on a oneshot channel. Settling resets the
//! flag and then drains the queue in FIFO order, so a request arriving after the drain starts a
//! fresh refresh instead of joining a finished one.

// crates.io
use tokio::sync::oneshot;
// self
use crate::{_prelude::*, error::RefreshError};

type RefreshOutcome = Result<(), RefreshError>;

/// Refresh flag plus the queue of requests waiting on the refresh in flight.
#[derive(Debug, Default)]
pub struct RefreshCoordinator {
	state: Mutex<RefreshState>,
}
impl RefreshCoordinator {
	/// Returns `true` while a refresh is in flight.
	pub fn is_refreshing(&self) -> bool {
		self.state.lock().refreshing
	}

	/// Returns the number of requests parked behind the refresh in flight.
	pub fn queued_waiters(&self) -> usize {
		self.state.lock().waiters.len()
	}

	/// Claims the refresh slot, or queues behind the refresh already in flight.
	pub(crate) fn join(&self) -> Ticket<'_> {
		let mut state = self.state.lock();

		if state.refreshing {
			let (tx, rx) = oneshot::channel();

			state.waiters.push(tx);

			Ticket::Waiter(RefreshWaiter(rx))
		} else {
			state.refreshing = true;

			Ticket::Leader(LeaderGuard { coordinator: self, settled: false })
		}
	}

	fn settle(&self, outcome: &RefreshOutcome) -> usize {
		let waiters = {
			let mut state = self.state.lock();

			state.refreshing = false;

			std::mem::take(&mut state.waiters)
		};
		let released = waiters.len();

		for waiter in waiters {
			// A waiter whose caller gave up has dropped its receiver.
			let _ = waiter.send(outcome.clone());
		}

		released
	}
}

#[derive(Debug, Default)]
struct RefreshState {
	refreshing: bool,
	waiters: Vec<oneshot::Sender<RefreshOutcome>>,
}

/// Role assigned to a request that needs a refresh.
#[derive(Debug)]
pub(crate) enum Ticket<'a> {
	/// Caller must run the refresh and settle the guard.
	Leader(LeaderGuard<'a>),
	/// Caller waits for the leader's outcome.
	Waiter(RefreshWaiter),
}

/// Exclusive right to run the refresh; settles the queue exactly once.
///
/// Dropping an unsettled guard rejects the queue with [`RefreshError::abandoned`].
#[derive(Debug)]
pub(crate) struct LeaderGuard<'a> {
	coordinator: &'a RefreshCoordinator,
	settled: bool,
}
impl LeaderGuard<'_> {
	/// Clears the refresh flag, then publishes `outcome` to every queued waiter.
	///
	/// Returns how many waiters were released.
	pub(crate) fn settle(mut self, outcome: &RefreshOutcome) -> usize {
		self.settled = true;

		self.coordinator.settle(outcome)
	}
}
impl Drop for LeaderGuard<'_> {
	fn drop(&mut self) {
		if !self.settled {
			self.coordinator.settle(&Err(RefreshError::abandoned()));
		}
	}
}

/// Parked request waiting for the leader's outcome.
#[derive(Debug)]
pub(crate) struct RefreshWaiter(oneshot::Receiver<RefreshOutcome>);
impl RefreshWaiter {
	pub(crate) async fn wait(self) -> RefreshOutcome {
		self.0.await.unwrap_or_else(|_| Err(RefreshError::abandoned()))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn expect_leader(ticket: Ticket<'_>) -> LeaderGuard<'_> {
		match ticket {
			Ticket::Leader(guard) => guard,
			Ticket::Waiter(_) => panic!("Expected the first joiner to lead the refresh."),
		}
	}

	fn expect_waiter(ticket: Ticket<'_>) -> RefreshWaiter {
		match ticket {
			Ticket::Waiter(waiter) => waiter,
			Ticket::Leader(_) => panic!("Expected a joiner to queue behind the refresh in flight."),
		}
	}

	#[tokio::test]
	async fn first_joiner_leads_and_others_queue() {
		let coordinator = RefreshCoordinator::default();
		let leader = expect_leader(coordinator.join());
		let first = expect_waiter(coordinator.join());
		let second = expect_waiter(coordinator.join());

		assert!(coordinator.is_refreshing());
		assert_eq!(coordinator.queued_waiters(), 2);
		assert_eq!(leader.settle(&Ok(())), 2);
		assert!(!coordinator.is_refreshing());
		assert_eq!(coordinator.queued_waiters(), 0);

		first.wait().await.expect("First waiter should observe the successful refresh.");
		second.wait().await.expect("Second waiter should observe the successful refresh.");
	}

	#[tokio::test]
	async fn failure_fans_out_to_every_waiter() {
		let coordinator = RefreshCoordinator::default();
		let leader = expect_leader(coordinator.join());
		let waiters = [expect_waiter(coordinator.join()), expect_waiter(coordinator.join())];

		leader.settle(&Err(RefreshError::new("refresh token expired")));

		for waiter in waiters {
			let err = waiter.wait().await.expect_err("Waiters should receive the refresh error.");

			assert_eq!(err.message, "refresh token expired");
		}
	}

	#[tokio::test]
	async fn dropped_leader_rejects_waiters_and_frees_slot() {
		let coordinator = RefreshCoordinator::default();
		let leader = expect_leader(coordinator.join());
		let waiter = expect_waiter(coordinator.join());

		drop(leader);

		assert!(!coordinator.is_refreshing());
		assert!(waiter.wait().await.is_err());

		let next = expect_leader(coordinator.join());

		assert_eq!(next.settle(&Ok(())), 0);
	}

	#[tokio::test]
	async fn waiters_are_released_in_queue_order() {
		let coordinator = RefreshCoordinator::default();
		let leader = expect_leader(coordinator.join());
		let released = Arc::new(Mutex::new(Vec::new()));
		let handles = (0..4)
			.map(|i| {
				let waiter = expect_waiter(coordinator.join());
				let released = released.clone();

				tokio::spawn(async move {
					waiter.wait().await.expect("Waiter should observe the successful refresh.");
					released.lock().push(i);
				})
			})
			.collect::<Vec<_>>();

		// Park every waiter on its channel before the outcome is published.
		tokio::task::yield_now().await;

		assert_eq!(leader.settle(&Ok(())), 4);

		for handle in handles {
			handle.await.expect("Waiter task should not panic.");
		}

		assert_eq!(*released.lock(), vec![0, 1, 2, 3]);
	}

	#[test]
	fn settle_clears_flag_before_publishing() {
		let coordinator = RefreshCoordinator::default();
		let leader = expect_leader(coordinator.join());
		let RefreshWaiter(mut rx) = expect_waiter(coordinator.join());

		leader.settle(&Ok(()));

		// The outcome is already delivered and a new joiner leads a fresh refresh.
		assert!(matches!(rx.try_recv(), Ok(Ok(()))));

		let _next = expect_leader(coordinator.join());
	}
}
