//! Property tests for the engine's invariants

use ball_clock_core_rs::{Ball, Clock, TrayKind};
use proptest::prelude::*;

fn ball_multiset(clock: &Clock) -> Vec<u32> {
    let mut balls: Vec<u32> = clock.queue().balls().map(Ball::number).collect();
    for kind in TrayKind::CASCADE {
        balls.extend(clock.tray(kind).balls().map(Ball::number));
    }
    balls.sort_unstable();
    balls
}

proptest! {
    /// No ball is ever lost or duplicated, and no tray ever exceeds its
    /// capacity, over an arbitrary prefix of ticks.
    #[test]
    fn conservation_and_capacity_hold(balls in 27u32..=127, ticks in 1usize..=2000) {
        let mut clock = Clock::new(balls).unwrap();
        for _ in 0..ticks {
            clock.tick().unwrap();
            for kind in TrayKind::CASCADE {
                prop_assert!(clock.tray(kind).len() <= kind.capacity());
            }
            prop_assert!(clock.queue().len() <= clock.queue().capacity());
        }
        let expected: Vec<u32> = (1..=balls).collect();
        prop_assert_eq!(ball_multiset(&clock), expected);
    }

    /// Every tilt returns exactly the balls that accumulated on the tray,
    /// in reverse order of their arrival.
    #[test]
    fn drains_return_reverse_arrival_order(balls in 27u32..=127) {
        let mut clock = Clock::new(balls).unwrap();
        let mut arrivals: [Vec<Ball>; 3] = [Vec::new(), Vec::new(), Vec::new()];

        // 1500 ticks covers minute, five-minute, and hour tilts
        for _ in 0..1500 {
            let result = clock.tick().unwrap();
            for overflow in &result.overflows {
                let idx = overflow.tray as usize;
                let mut expected = arrivals[idx].clone();
                expected.reverse();
                prop_assert_eq!(&overflow.returned, &expected);
                arrivals[idx].clear();
            }
            if let Some(tray) = result.rested_on {
                arrivals[tray as usize].push(result.elevated);
            }
        }
    }

    /// Two clocks with the same ball count evolve identically.
    #[test]
    fn ticking_is_deterministic(balls in 27u32..=127, ticks in 1usize..=500) {
        let mut a = Clock::new(balls).unwrap();
        let mut b = Clock::new(balls).unwrap();
        for _ in 0..ticks {
            let ra = a.tick().unwrap();
            let rb = b.tick().unwrap();
            prop_assert_eq!(ra, rb);
        }
        prop_assert_eq!(a, b);
    }
}
