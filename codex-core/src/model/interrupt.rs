use std::convert::Infallible;

/// Signal unwinding a recursive search up to its boundary.
///
/// Every recursive frame propagates it with `?`, so a search stops as soon
/// as one frame raises it, without testing a flag after each call.
///
/// - `Stop`: the search is done. Recovered by `recover` as a normal result.
/// - `Fail(E)`: a genuine failure. Passes through `recover` untouched.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Interrupt<E = Infallible> {
	Stop,
	#[allow(dead_code, reason = "both synthesizers walk with infallible visitors")]
	Fail(E),
}

/// Result of one step of an interruptible search.
pub(crate) type Flow<E = Infallible> = Result<(), Interrupt<E>>;

/// Requests the search to stop.
pub(crate) fn interrupt<E>() -> Flow<E> {
	Err(Interrupt::Stop)
}

/// Search boundary: turns `Stop` into a normal completion.
///
/// Returns `Ok(true)` if the search was interrupted, `Ok(false)` if it ran to
/// its end, and the failure if one was raised.
pub(crate) fn recover<E>(flow: Flow<E>) -> Result<bool, E> {
	match flow {
		Ok(()) => Ok(false),
		Err(Interrupt::Stop) => {
			log::trace!("search interrupted early");
			Ok(true)
		}
		Err(Interrupt::Fail(e)) => Err(e),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Counts down recursively, stopping at `stop_at` or failing at `fail_at`.
	fn descend(depth: usize, stop_at: usize, fail_at: usize, visited: &mut Vec<usize>) -> Flow<String> {
		visited.push(depth);
		if depth == stop_at {
			return interrupt();
		}
		if depth == fail_at {
			return Err(Interrupt::Fail(format!("failed at {depth}")));
		}
		if depth > 0 {
			descend(depth - 1, stop_at, fail_at, visited)?;
		}
		visited.push(depth);
		Ok(())
	}

	#[test]
	fn completes_without_interrupt() {
		let mut visited = Vec::new();
		assert_eq!(recover(descend(2, usize::MAX, usize::MAX, &mut visited)), Ok(false));
		assert_eq!(visited, vec![2, 1, 0, 0, 1, 2]);
	}

	#[test]
	fn stop_unwinds_every_frame() {
		let mut visited = Vec::new();
		assert_eq!(recover(descend(5, 3, usize::MAX, &mut visited)), Ok(true));
		// No frame resumes after the stop
		assert_eq!(visited, vec![5, 4, 3]);
	}

	#[test]
	fn failure_is_not_swallowed() {
		let mut visited = Vec::new();
		assert_eq!(recover(descend(5, usize::MAX, 2, &mut visited)), Err("failed at 2".to_owned()));
		assert_eq!(visited, vec![5, 4, 3, 2]);
	}
}
