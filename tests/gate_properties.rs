use observable_property::{cloned, Property};
use proptest::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

proptest! {
    #[test]
    fn same_value_never_fires(a in any::<i64>()) {
        let hits = Rc::new(Cell::new(0));
        let mut p = Property::new(a)
            .on_changed(cloned!(hits => move |_| hits.set(hits.get() + 1)))
            .on_changing(cloned!(hits => move |_, _| hits.set(hits.get() + 1)));

        prop_assert!(!p.set(a));
        prop_assert_eq!(hits.get(), 0);
    }

    #[test]
    fn distinct_values_fire_once_each(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut p = Property::new(a)
            .on_changing(cloned!(log => move |old, new| log.borrow_mut().push((Some(*old), *new))))
            .on_changed(cloned!(log => move |v| log.borrow_mut().push((None, *v))));

        prop_assert!(p.set(b));
        prop_assert_eq!(log.borrow().clone(), vec![(Some(a), b), (None, b)]);
    }

    #[test]
    fn get_returns_last_write(writes in proptest::collection::vec(any::<u8>(), 1..32)) {
        let mut p = Property::new(0u8);
        for w in &writes {
            p.set(*w);
            prop_assert_eq!(*p.get(), *w);
        }
    }

    #[test]
    fn callback_count_matches_transitions(writes in proptest::collection::vec(0u8..4, 0..64)) {
        let hits = Rc::new(Cell::new(0usize));
        let mut p = Property::new(0u8).on_changed(cloned!(hits => move |_| hits.set(hits.get() + 1)));

        let mut expected = 0;
        let mut current = 0u8;
        for w in writes {
            if w != current {
                expected += 1;
                current = w;
            }
            p.set(w);
        }
        prop_assert_eq!(hits.get(), expected);
    }

    #[test]
    fn comparisons_delegate_to_raw(a in any::<i32>(), b in any::<i32>()) {
        let pa = Property::new(a);
        let pb = Property::new(b);

        prop_assert_eq!(pa == b, a == b);
        prop_assert_eq!(pa != b, a != b);
        prop_assert_eq!(pa < b, a < b);
        prop_assert_eq!(pa > b, a > b);

        prop_assert_eq!(a == pb, a == b);
        prop_assert_eq!(a < pb, a < b);
        prop_assert_eq!(a > pb, a > b);

        prop_assert_eq!(pa == pb, a == b);
        prop_assert_eq!(pa < pb, a < b);
        prop_assert_eq!(pa > pb, a > b);
    }

    #[test]
    fn float_comparisons_delegate(a in any::<f64>(), b in any::<f64>()) {
        let pa = Property::new(a);
        prop_assert_eq!(pa == b, a == b);
        prop_assert_eq!(pa < b, a < b);
        prop_assert_eq!(b > pa, b > a);
        prop_assert_eq!(pa.partial_cmp(&b), a.partial_cmp(&b));
    }
}
