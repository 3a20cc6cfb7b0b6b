use proptest::prelude::*;

use proledger_store::{Slot, SlotList};

#[derive(Clone, Debug)]
enum Op {
    Insert(u8),
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u8..16).prop_map(Op::Insert),
        (1u8..16).prop_map(Op::Remove),
    ]
}

proptest! {
    /// A slot list matches a naive "first vacant slot, else append" model.
    #[test]
    fn slot_list_matches_scan_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut list = SlotList::new();
        let mut model: Vec<Option<u8>> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(v) => {
                    list.insert(v);
                    if !model.contains(&Some(v)) {
                        match model.iter().position(Option::is_none) {
                            Some(pos) => model[pos] = Some(v),
                            None => model.push(Some(v)),
                        }
                    }
                }
                Op::Remove(v) => {
                    list.remove(&v);
                    if let Some(pos) = model.iter().position(|s| *s == Some(v)) {
                        model[pos] = None;
                    }
                }
            }
        }

        let layout: Vec<Option<u8>> = list
            .slots()
            .iter()
            .map(|s| match s {
                Slot::Occupied(v) => Some(*v),
                Slot::Vacant => None,
            })
            .collect();
        prop_assert_eq!(layout, model);
    }

    /// The list never shrinks.
    #[test]
    fn slot_list_length_is_monotonic(ops in prop::collection::vec(op(), 0..64)) {
        let mut list = SlotList::new();
        let mut last = 0;
        for op in ops {
            match op {
                Op::Insert(v) => { list.insert(v); }
                Op::Remove(v) => { list.remove(&v); }
            }
            prop_assert!(list.len() >= last);
            last = list.len();
        }
    }
}
