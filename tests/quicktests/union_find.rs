use std::collections::{HashMap, HashSet};

use copse::{Error, UnionFind};

use quickcheck_macros::quickcheck;

use crate::Op;

/// A deliberately naive model: every value carries the label of its set and a union relabels
/// one whole set.
#[derive(Default)]
struct Model {
    labels: HashMap<u8, usize>,
}

impl Model {
    fn unify(&mut self, a: u8, b: u8) {
        let (from, to) = (self.labels[&b], self.labels[&a]);
        for label in self.labels.values_mut() {
            if *label == from {
                *label = to;
            }
        }
    }

    fn connected(&self, a: u8, b: u8) -> bool {
        self.labels[&a] == self.labels[&b]
    }
}

#[quickcheck]
fn matches_naive_model(values: HashSet<u8>, ops: Vec<Op<u8>>) -> bool {
    let mut sets = UnionFind::new();
    let mut model = Model::default();
    for (label, value) in values.into_iter().enumerate() {
        sets.insert(value).unwrap();
        model.labels.insert(value, label);
    }

    for op in ops {
        match op {
            // Re-inserting orphans a slot, which the unit tests cover.
            Op::Insert(x) if model.labels.contains_key(&x) => {}
            Op::Insert(x) => {
                sets.insert(x).unwrap();
                let label = model.labels.len();
                model.labels.insert(x, label);
            }
            Op::Unify(a, b) => {
                let result = sets.unify(&a, &b);
                if a != b && !(model.labels.contains_key(&a) && model.labels.contains_key(&b)) {
                    if result != Err(Error::ElementNotFound) {
                        return false;
                    }
                } else if model.labels.contains_key(&a) {
                    model.unify(a, b);
                }
            }
            Op::Find(x) => {
                let found = sets.find(&x);
                let agrees = match model.labels.get(&x) {
                    None => found == Err(Error::ElementNotFound),
                    Some(_) => found.map_or(false, |rep| model.connected(rep, x)),
                };
                if !agrees {
                    return false;
                }
            }
        }
    }

    let values: Vec<_> = model.labels.keys().copied().collect();
    values.iter().all(|a| {
        values.iter().all(|b| {
            let connected = model.connected(*a, *b);
            sets.connected(a, b) == Ok(connected)
                && (sets.find(a) == sets.find(b)) == connected
        })
    })
}

#[quickcheck]
fn set_count_drops_once_per_distinct_unify(values: HashSet<u8>, pairs: Vec<(u8, u8)>) -> bool {
    let mut sets = UnionFind::new();
    for value in &values {
        sets.insert(*value).unwrap();
    }
    if sets.set_count() != values.len() {
        return false;
    }

    let mut expected = values.len();
    for (a, b) in pairs {
        let distinct_reps = match (sets.find(&a), sets.find(&b)) {
            (Ok(x), Ok(y)) => x != y,
            _ => false,
        };
        match sets.unify(&a, &b) {
            Ok(()) if a != b => expected = expected.saturating_sub(1),
            Ok(()) => {}
            Err(_) => continue,
        }
        if distinct_reps && sets.find(&a) != sets.find(&b) {
            return false;
        }
    }

    sets.set_count() == expected
}

#[quickcheck]
fn find_is_idempotent(values: HashSet<u8>, pairs: Vec<(u8, u8)>) -> bool {
    let mut sets = UnionFind::new();
    for value in &values {
        sets.insert(*value).unwrap();
    }
    for (a, b) in pairs {
        let _ = sets.unify(&a, &b);
    }

    values
        .iter()
        .all(|value| sets.find(value) == sets.find(value) && sets.find(value).is_ok())
}
