//! Dataset Invariant Property Tests
//!
//! Property tests over randomly generated trace datasets: idempotent
//! insertion, symmetry of the recorded relation, monotonicity of the
//! contact queries, ordering of contact times, and origin exclusion.

use crate::*;
use proptest::prelude::*;

/// A generated trace as small-index people and a bounded timestamp
type RawTrace = (u8, u8, Timestamp);

fn person_name(i: u8) -> String {
    format!("P{}", i)
}

/// Build a tracer from generated triples, skipping self-pairs
fn build(raw: &[RawTrace]) -> ContactTracer {
    let mut tracer = ContactTracer::new();
    for (a, b, t) in raw {
        if a == b {
            continue;
        }
        tracer
            .add_trace(&Trace::new(person_name(*a), person_name(*b), *t))
            .expect("generated traces are structurally valid");
    }
    tracer
}

fn raw_traces() -> impl Strategy<Value = Vec<RawTrace>> {
    proptest::collection::vec((0u8..6, 0u8..6, 0i64..500), 0..40)
}

proptest! {
    #[test]
    fn prop_duplicate_ingestion_changes_nothing(raw in raw_traces()) {
        let once = build(&raw);

        // Ingest the whole dataset twice, second time in reversed person
        // order.
        let mut twice = ContactTracer::new();
        for (a, b, t) in raw.iter().chain(raw.iter()) {
            if a == b {
                continue;
            }
            twice
                .add_trace(&Trace::new(person_name(*b), person_name(*a), *t))
                .unwrap();
        }

        prop_assert_eq!(once.index().len(), twice.index().len());
        for a in 0u8..6 {
            let name_a = person_name(a);
            prop_assert_eq!(
                names(&once.contacts(&name_a)),
                names(&twice.contacts(&name_a))
            );
            for b in 0u8..6 {
                let name_b = person_name(b);
                prop_assert_eq!(
                    once.contact_times(&name_a, &name_b),
                    twice.contact_times(&name_a, &name_b)
                );
            }
        }
    }

    #[test]
    fn prop_contact_relation_is_symmetric(raw in raw_traces()) {
        let tracer = build(&raw);

        for a in 0u8..6 {
            for b in 0u8..6 {
                let name_a = person_name(a);
                let name_b = person_name(b);
                prop_assert_eq!(
                    tracer.contact_times(&name_a, &name_b),
                    tracer.contact_times(&name_b, &name_a)
                );

                let a_sees_b = tracer.contacts(&name_a).contains(name_b.as_str());
                let b_sees_a = tracer.contacts(&name_b).contains(name_a.as_str());
                prop_assert_eq!(a_sees_b, b_sees_a);
            }
        }
    }

    #[test]
    fn prop_contact_times_strictly_ascending(raw in raw_traces()) {
        let tracer = build(&raw);

        for a in 0u8..6 {
            for b in 0u8..6 {
                let times = tracer.contact_times(&person_name(a), &person_name(b));
                prop_assert!(
                    times.windows(2).all(|w| w[0] < w[1]),
                    "contact times must be strictly ascending: {:?}",
                    times
                );
            }
        }
    }

    #[test]
    fn prop_contacts_after_is_monotonic_subset(
        raw in raw_traces(),
        cutoff in 0i64..600,
    ) {
        let tracer = build(&raw);

        for a in 0u8..6 {
            let name = person_name(a);
            let all = tracer.contacts(&name);
            let after = tracer.contacts_after(&name, cutoff);
            prop_assert!(after.is_subset(&all));

            // Cutoff at or below zero covers the whole history.
            prop_assert_eq!(names(&tracer.contacts_after(&name, 0)), names(&all));
        }
    }

    #[test]
    fn prop_simulation_never_contains_origin(
        raw in raw_traces(),
        origin in 0u8..6,
        contagion_time in 0i64..600,
    ) {
        let tracer = build(&raw);
        let name = person_name(origin);

        let exposed = tracer.contact_trace(&name, contagion_time);
        prop_assert!(!exposed.contains(name.as_str()));
    }

    #[test]
    fn prop_exposed_people_are_reachable_contacts(raw in raw_traces()) {
        // Everyone in the exposure set must at least appear somewhere in the
        // dataset; the simulation cannot invent people.
        let tracer = build(&raw);
        let exposed = tracer.contact_trace(&person_name(0), 0);

        for person in &exposed {
            prop_assert!(tracer.index().contains_person(person));
        }
    }
}
