//! Races between concurrent offers.
//!
//! Tests cover:
//! - Exactly one winner among N distinct qualifying candidates (threads)
//! - Every offering caller observes the same winner
//! - Rejected candidates racing with qualifying ones never win
//! - Offers from async tasks on a multi-thread runtime

use slotwire::{Component, Dependency};
use std::sync::{Arc, Barrier};
use std::thread;

#[derive(Debug)]
struct Worker {
    id: usize,
}

fn _assert_send_sync<T: Send + Sync>() {}

#[test]
fn dependency_is_send_sync() {
    _assert_send_sync::<Dependency<Worker>>();
    _assert_send_sync::<Arc<dyn slotwire::AnyDependency>>();
}

#[test]
fn one_winner_among_racing_threads() {
    const N: usize = 16;
    for _ in 0..50 {
        let dep = Dependency::<Worker>::required();
        let barrier = Barrier::new(N);
        let results: Vec<Arc<Worker>> = thread::scope(|s| {
            let handles: Vec<_> = (0..N)
                .map(|id| {
                    let dep = &dep;
                    let barrier = &barrier;
                    s.spawn(move || {
                        let candidate: Arc<dyn Component> = Arc::new(Worker { id });
                        barrier.wait();
                        dep.offer(&candidate).expect("qualifying offer leaves slot filled")
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("offer thread panicked"))
                .collect()
        });

        let winner = dep.resolve().unwrap();
        assert!(winner.id < N);
        for seen in &results {
            assert!(Arc::ptr_eq(seen, &winner));
        }
    }
}

#[test]
fn rejected_candidates_never_win_a_race() {
    const N: usize = 16;
    for _ in 0..50 {
        let dep = Dependency::<Worker>::optional_where(|w| w.id % 2 == 1);
        let barrier = Barrier::new(N);
        thread::scope(|s| {
            for id in 0..N {
                let dep = &dep;
                let barrier = &barrier;
                s.spawn(move || {
                    let candidate: Arc<dyn Component> = Arc::new(Worker { id });
                    barrier.wait();
                    dep.offer(&candidate);
                });
            }
        });
        assert_eq!(dep.peek().unwrap().id % 2, 1);
    }
}

#[test]
fn mixed_types_race_to_the_matching_candidate() {
    let dep = Dependency::<Worker>::optional();
    let barrier = Barrier::new(8);
    thread::scope(|s| {
        for id in 0..8 {
            let dep = &dep;
            let barrier = &barrier;
            s.spawn(move || {
                let candidate: Arc<dyn Component> = if id == 5 {
                    Arc::new(Worker { id })
                } else {
                    Arc::new(format!("not a worker {id}"))
                };
                barrier.wait();
                dep.offer(&candidate);
            });
        }
    });
    assert_eq!(dep.peek().unwrap().id, 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn one_winner_among_racing_tasks() {
    let dep = Arc::new(Dependency::<Worker>::required());
    let mut tasks = Vec::new();
    for id in 0..32 {
        let dep = Arc::clone(&dep);
        tasks.push(tokio::spawn(async move {
            let candidate: Arc<dyn Component> = Arc::new(Worker { id });
            dep.offer(&candidate)
        }));
    }

    let mut seen = Vec::new();
    for task in tasks {
        seen.push(task.await.unwrap().unwrap());
    }
    let winner = dep.resolve().unwrap();
    for s in &seen {
        assert!(Arc::ptr_eq(s, &winner));
    }
}
